//! Noyau — évaluation (pipeline complet)
//!
//! nettoyer -> valider -> tokenize -> analyser -> eval_arbre -> contrôle fini
//!
//! Flux strictement linéaire et synchrone : chaque étape consomme la sortie
//! de la précédente, rapporte sa propre erreur immédiatement, aucune ne
//! retente ni ne boucle. `evaluer` est une fonction pure de son entrée et
//! des tables fixes : appelable à chaque frappe, deux appels identiques
//! donnent deux résultats identiques.

use super::analyse::analyser;
use super::erreur::ErreurEval;
use super::expr::{Expr, OpBin};
use super::jetons::{nettoyer, tokenize, valider};
use super::tables;

/// API publique : évalue une expression textuelle brute.
///
/// Retourne le f64 FINI du résultat, ou l’erreur typée de la première
/// étape qui a échoué.
pub fn evaluer(brut: &str) -> Result<f64, ErreurEval> {
    let propre = nettoyer(brut);
    valider(&propre)?;

    let jetons = tokenize(&propre)?;

    // Champ de saisie vide : zéro par convention, pas une erreur d’analyse.
    if jetons.is_empty() {
        return Ok(0.0);
    }

    let arbre = analyser(&jetons)?;
    let valeur = eval_arbre(&arbre);

    // Division par zéro, √ d’un négatif, log d’un non-positif, dépassement :
    // tout se décide ici, sur le résultat final.
    if !valeur.is_finite() {
        return Err(ErreurEval::DomaineMath);
    }
    Ok(valeur)
}

/// Parcours post-ordre de l’arbre. Sémantique IEEE-754 en cours de route
/// (1/0 -> ∞, 0/0 -> NaN) ; la finitude n’est contrôlée qu’en sortie de
/// pipeline, sur le résultat complet.
fn eval_arbre(expr: &Expr) -> f64 {
    use Expr::*;

    match expr {
        Nombre(v) => *v,

        // L’analyseur a déjà vérifié le nom contre la table : une absence
        // ici est une violation d’invariant interne, pas une erreur
        // utilisateur.
        Constante(nom) => match tables::constante(nom) {
            Some(v) => v,
            None => unreachable!("constante validée à l’analyse: {nom}"),
        },

        MoinsUnaire(x) => -eval_arbre(x),

        Bin(op, a, b) => {
            let a = eval_arbre(a);
            let b = eval_arbre(b);
            match op {
                OpBin::Add => a + b,
                OpBin::Sub => a - b,
                OpBin::Mul => a * b,
                OpBin::Div => a / b,
                OpBin::Pow => a.powf(b),
                OpBin::Mod => a % b,
            }
        }

        Appel(nom, x) => match tables::fonction(nom) {
            Some(f) => f(eval_arbre(x)),
            None => unreachable!("fonction validée à l’analyse: {nom}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::evaluer;

    fn eval_ok(s: &str) -> f64 {
        evaluer(s).unwrap_or_else(|e| panic!("evaluer({s:?}) erreur: {e}"))
    }

    #[test]
    fn entree_vide_vaut_zero() {
        assert_eq!(eval_ok(""), 0.0);
        assert_eq!(eval_ok("   "), 0.0);
    }

    #[test]
    fn arithmetique_de_base() {
        assert_eq!(eval_ok("2+2"), 4.0);
        assert_eq!(eval_ok("10-4"), 6.0);
        assert_eq!(eval_ok("6*7"), 42.0);
        assert_eq!(eval_ok("9/2"), 4.5);
    }

    #[test]
    fn priorites_des_operateurs() {
        assert_eq!(eval_ok("10+5*2"), 20.0);
        assert_eq!(eval_ok("(10+5)*2"), 30.0);
        assert_eq!(eval_ok("2+3*4-1"), 13.0);
    }

    #[test]
    fn puissance_droite_associative() {
        // 2^3^2 == 2^(3^2) == 512, PAS (2^3)^2 == 64
        assert_eq!(eval_ok("2^3^2"), 512.0);
        assert_eq!(eval_ok("(2^3)^2"), 64.0);
    }

    #[test]
    fn reste_flottant() {
        assert_eq!(eval_ok("10%3"), 1.0);
        assert_eq!(eval_ok("7.5%2"), 1.5);
    }

    #[test]
    fn moins_unaire() {
        assert_eq!(eval_ok("-5+3"), -2.0);
        assert_eq!(eval_ok("--5"), 5.0);
        assert_eq!(eval_ok("2*-3"), -6.0);
        // unaire plus serré que ^ : (-2)^2, pas -(2^2)
        assert_eq!(eval_ok("-2^2"), 4.0);
    }

    #[test]
    fn glyphes_alternatifs_et_espaces() {
        assert_eq!(eval_ok("7×3"), 21.0);
        assert_eq!(eval_ok("8÷2"), 4.0);
        assert_eq!(eval_ok("5−2"), 3.0);
        assert_eq!(eval_ok(" 2 + 2 "), 4.0);
    }
}
