// src/noyau/analyse.rs
//
// Analyse syntaxique : descente récursive, précédences encodées dans la
// grammaire elle-même (un niveau de production par palier).
//
//   expression := terme (("+"|"-") terme)*
//   terme      := puissance (("*"|"/"|"%") puissance)*
//   puissance  := unaire ("^" puissance)?      // droite-assoc : récursion à droite
//   unaire     := "-" unaire | atome
//   atome      := nombre | ident appel? | "(" expression ")"
//   appel      := "(" expression ")"           // ident doit être une fonction connue
//
// Règles de résolution :
// - Ident suivi de '('  => fonction connue, sinon IdentifiantInconnu
// - Ident nu            => constante connue, sinon IdentifiantInconnu
// - fonction sans '('   => Syntaxe
// - ')' manquante       => ParentheseNonFermee
// - jetons restants après l’expression de tête => Syntaxe
//
// L’analyseur consomme TOUTE la suite de jetons ou échoue ; aucun nœud
// partiellement construit ne s’échappe d’un chemin d’erreur.

use super::erreur::ErreurEval;
use super::expr::{Expr, OpBin};
use super::jetons::Jeton;
use super::tables;

/// Analyse une suite complète de jetons en arbre d’expression.
pub fn analyser(jetons: &[Jeton]) -> Result<Expr, ErreurEval> {
    let mut a = Analyseur { jetons, pos: 0 };

    let arbre = a.expression()?;

    if let Some(j) = a.courant() {
        return Err(ErreurEval::Syntaxe(format!("jeton en trop: {j:?}")));
    }
    Ok(arbre)
}

struct Analyseur<'a> {
    jetons: &'a [Jeton],
    pos: usize,
}

impl Analyseur<'_> {
    fn courant(&self) -> Option<&Jeton> {
        self.jetons.get(self.pos)
    }

    fn avancer(&mut self) {
        self.pos += 1;
    }

    // expression := terme (("+"|"-") terme)*   — gauche-associatif
    fn expression(&mut self) -> Result<Expr, ErreurEval> {
        let mut gauche = self.terme()?;

        loop {
            let op = match self.courant() {
                Some(Jeton::Plus) => OpBin::Add,
                Some(Jeton::Minus) => OpBin::Sub,
                _ => break,
            };
            self.avancer();

            let droite = self.terme()?;
            gauche = Expr::Bin(op, Box::new(gauche), Box::new(droite));
        }

        Ok(gauche)
    }

    // terme := puissance (("*"|"/"|"%") puissance)*   — gauche-associatif
    fn terme(&mut self) -> Result<Expr, ErreurEval> {
        let mut gauche = self.puissance()?;

        loop {
            let op = match self.courant() {
                Some(Jeton::Star) => OpBin::Mul,
                Some(Jeton::Slash) => OpBin::Div,
                Some(Jeton::Percent) => OpBin::Mod,
                _ => break,
            };
            self.avancer();

            let droite = self.puissance()?;
            gauche = Expr::Bin(op, Box::new(gauche), Box::new(droite));
        }

        Ok(gauche)
    }

    // puissance := unaire ("^" puissance)?
    // Droite-associatif par récursion : 2^3^2 == 2^(3^2).
    fn puissance(&mut self) -> Result<Expr, ErreurEval> {
        let base = self.unaire()?;

        if matches!(self.courant(), Some(Jeton::Caret)) {
            self.avancer();
            let exposant = self.puissance()?;
            return Ok(Expr::Bin(
                OpBin::Pow,
                Box::new(base),
                Box::new(exposant),
            ));
        }

        Ok(base)
    }

    // unaire := "-" unaire | atome
    fn unaire(&mut self) -> Result<Expr, ErreurEval> {
        if matches!(self.courant(), Some(Jeton::Minus)) {
            self.avancer();
            let operande = self.unaire()?;
            return Ok(Expr::MoinsUnaire(Box::new(operande)));
        }
        self.atome()
    }

    // atome := nombre | ident appel? | "(" expression ")"
    fn atome(&mut self) -> Result<Expr, ErreurEval> {
        match self.courant() {
            Some(Jeton::Num(v)) => {
                let v = *v;
                self.avancer();
                Ok(Expr::Nombre(v))
            }

            Some(Jeton::Ident(nom)) => {
                let nom = nom.clone();
                self.avancer();
                self.ident(nom)
            }

            Some(Jeton::LPar) => {
                self.avancer();
                let interieur = self.expression()?;
                self.fermer_parenthese()?;
                Ok(interieur)
            }

            Some(j) => Err(ErreurEval::Syntaxe(format!("jeton inattendu: {j:?}"))),
            None => Err(ErreurEval::Syntaxe("fin d’entrée inattendue".into())),
        }
    }

    // Résolution d’un identifiant déjà consommé.
    fn ident(&mut self, nom: String) -> Result<Expr, ErreurEval> {
        // Suivi de '(' : appel — le nom DOIT être dans la table des fonctions.
        if matches!(self.courant(), Some(Jeton::LPar)) {
            if !tables::est_fonction(&nom) {
                return Err(ErreurEval::IdentifiantInconnu(nom));
            }
            self.avancer();
            let argument = self.expression()?;
            self.fermer_parenthese()?;
            return Ok(Expr::Appel(nom, Box::new(argument)));
        }

        // Fonction sans '(' : violation de grammaire, pas un nom inconnu.
        if tables::est_fonction(&nom) {
            return Err(ErreurEval::Syntaxe(format!(
                "fonction sans argument: {nom}"
            )));
        }

        // Ident nu : le nom DOIT être dans la table des constantes.
        if tables::constante(&nom).is_none() {
            return Err(ErreurEval::IdentifiantInconnu(nom));
        }
        Ok(Expr::Constante(nom))
    }

    fn fermer_parenthese(&mut self) -> Result<(), ErreurEval> {
        match self.courant() {
            Some(Jeton::RPar) => {
                self.avancer();
                Ok(())
            }
            _ => Err(ErreurEval::ParentheseNonFermee),
        }
    }
}
