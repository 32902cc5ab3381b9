//! src/app/etat.rs
//!
//! État UI (sans vue, sans analyse).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, affichage live,
//! historique) et offrir les actions boutons, sans logique d’affichage egui.
//!
//! Contrats :
//! - Aucune analyse ici : tout passe par noyau::evaluer / noyau::formater.
//! - Actions déterministes, sans effet de bord caché.
//! - Historique possédé par l’UI et borné — pas d’état global mutable.
//!   Un échec d’évaluation laisse l’entrée de l’utilisateur intacte.

use crate::noyau;

/// Nombre d’entrées d’historique conservées (les plus récentes en tête).
const HISTORIQUE_MAX: usize = 10;

/// Indicateur générique d’échec : la vue replie toutes les sortes d’erreur
/// du moteur sur ce seul mot. Le détail typé part en journal de debug.
const AFFICHAGE_ERREUR: &str = "Erreur";

/// Une ligne d’historique : l’expression soumise et son résultat affiché.
#[derive(Clone, Debug, PartialEq)]
pub struct Calcul {
    pub expression: String,
    pub resultat: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sortie live (recalculée à chaque frappe) ---
    pub affichage: String,

    // --- historique : plus récent en tête, borné à HISTORIQUE_MAX ---
    pub historique: Vec<Calcul>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            // entrée vide => zéro (convention du moteur)
            affichage: noyau::formater(0.0),
            historique: Vec::new(),
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Affichage live ------------------------ */

    /// Réévalue l’entrée courante et met à jour l’affichage.
    /// Toute erreur se replie sur l’indicateur générique.
    pub fn rafraichir(&mut self) {
        match noyau::evaluer(&self.entree) {
            Ok(v) => self.affichage = noyau::formater(v),
            Err(e) => {
                log::debug!("évaluation rejetée: {:?} -> {e}", self.entree);
                self.affichage = AFFICHAGE_ERREUR.to_string();
            }
        }
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// Insertion brute (chiffres, opérateurs, fonctions, constantes).
    pub fn inserer(&mut self, texte: &str) {
        self.entree.push_str(texte);
        self.rafraichir();
        self.focus_entree = true;
    }

    /// C : efface l’entrée (l’affichage repasse à 0).
    pub fn effacer(&mut self) {
        self.entree.clear();
        self.rafraichir();
        self.focus_entree = true;
    }

    /// DEL : retire le dernier caractère de l’entrée.
    pub fn retour(&mut self) {
        self.entree.pop();
        self.rafraichir();
        self.focus_entree = true;
    }

    /// Bouton % : ajoute le texte `*0.01` à l’entrée BRUTE puis réévalue.
    /// Transformation de texte côté UI, distincte de l’opérateur `%` de la
    /// grammaire (reste flottant) — les deux coexistent, jamais unifiés.
    pub fn pourcent(&mut self) {
        self.entree.push_str("*0.01");
        self.rafraichir();
        self.focus_entree = true;
    }

    /// = : en cas de succès, archive {expression, résultat} en tête
    /// d’historique puis remplace l’entrée par le résultat affiché.
    /// En cas d’échec, l’entrée reste telle quelle.
    pub fn valider_entree(&mut self) {
        match noyau::evaluer(&self.entree) {
            Ok(v) => {
                let resultat = noyau::formater(v);
                let expression = std::mem::take(&mut self.entree);
                self.archiver(expression, resultat.clone());
                self.entree = resultat;
            }
            Err(e) => {
                log::debug!("soumission rejetée: {:?} -> {e}", self.entree);
            }
        }
        self.rafraichir();
        self.focus_entree = true;
    }

    /* ------------------------ Historique ------------------------ */

    fn archiver(&mut self, expression: String, resultat: String) {
        self.historique.insert(
            0,
            Calcul {
                expression,
                resultat,
            },
        );
        self.historique.truncate(HISTORIQUE_MAX);
    }

    /// Clic sur une ligne d’historique : rejoue l’expression archivée.
    pub fn rappeler(&mut self, index: usize) {
        if let Some(calcul) = self.historique.get(index) {
            self.entree = calcul.expression.clone();
            self.rafraichir();
            self.focus_entree = true;
        }
    }

    /// Vide l’historique (sans toucher à l’entrée ni à l’affichage).
    pub fn vider_historique(&mut self) {
        self.historique.clear();
        self.focus_entree = true;
    }
}

#[cfg(test)]
mod tests {
    use super::{AppCalc, HISTORIQUE_MAX};

    fn app_avec(entree: &str) -> AppCalc {
        let mut app = AppCalc::default();
        app.inserer(entree);
        app
    }

    #[test]
    fn affichage_initial_zero() {
        let app = AppCalc::default();
        assert_eq!(app.affichage, "0");
    }

    #[test]
    fn frappe_met_a_jour_le_live() {
        let mut app = AppCalc::default();
        app.inserer("2+2");
        assert_eq!(app.affichage, "4");
        app.inserer("+");
        assert_eq!(app.affichage, "Erreur");
        app.retour();
        assert_eq!(app.affichage, "4");
    }

    #[test]
    fn egal_archive_et_remplace_entree() {
        let mut app = app_avec("2^3^2");
        app.valider_entree();

        assert_eq!(app.entree, "512");
        assert_eq!(app.affichage, "512");
        assert_eq!(app.historique.len(), 1);
        assert_eq!(app.historique[0].expression, "2^3^2");
        assert_eq!(app.historique[0].resultat, "512");
    }

    #[test]
    fn egal_sur_echec_laisse_tout_intact() {
        let mut app = app_avec("2+foo");
        app.valider_entree();

        assert_eq!(app.entree, "2+foo");
        assert!(app.historique.is_empty());
        assert_eq!(app.affichage, "Erreur");
    }

    #[test]
    fn historique_borne_plus_recent_en_tete() {
        let mut app = AppCalc::default();
        for i in 0..15 {
            app.effacer();
            app.inserer(&format!("{i}+1"));
            app.valider_entree();
        }

        assert_eq!(app.historique.len(), HISTORIQUE_MAX);
        // dernière soumission en tête
        assert_eq!(app.historique[0].expression, "14+1");
        assert_eq!(app.historique[0].resultat, "15");
    }

    #[test]
    fn rappel_rejoue_l_expression() {
        let mut app = app_avec("sin(90)");
        app.valider_entree();
        app.effacer();

        app.rappeler(0);
        assert_eq!(app.entree, "sin(90)");
        assert_eq!(app.affichage, "1");

        // index hors bornes : sans effet
        app.rappeler(42);
        assert_eq!(app.entree, "sin(90)");
    }

    #[test]
    fn pourcent_travaille_sur_le_texte() {
        let mut app = app_avec("50");
        app.pourcent();
        assert_eq!(app.entree, "50*0.01");
        assert_eq!(app.affichage, "0.5");
    }

    #[test]
    fn vider_historique() {
        let mut app = app_avec("1+1");
        app.valider_entree();
        assert!(!app.historique.is_empty());

        app.vider_historique();
        assert!(app.historique.is_empty());
    }
}
