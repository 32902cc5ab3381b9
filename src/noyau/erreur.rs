// src/noyau/erreur.rs
//
// Taxonomie d’erreurs du moteur.
// Toutes terminales : une évaluation qui échoue rapporte son erreur et
// laisse l’entrée de l’utilisateur intacte. Pas de rattrapage partiel.
//
// Le moteur conserve la distinction entre les sortes (testabilité) ;
// la vue est libre de tout replier sur un seul message générique.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurEval {
    /// Caractère hors de la classe permise `[0-9+-*/^().,%A-Za-z]`.
    #[error("caractère interdit: '{0}'")]
    CaractereInvalide(char),

    /// Jeton numérique sans chiffre, ou avec plus d’un point décimal.
    #[error("nombre mal formé: {0:?}")]
    NombreMalForme(String),

    /// Identifiant qui n’est ni une fonction ni une constante connue.
    #[error("identifiant inconnu: {0:?}")]
    IdentifiantInconnu(String),

    /// Groupe ou appel de fonction sans parenthèse fermante.
    #[error("parenthèse non fermée")]
    ParentheseNonFermee,

    /// Toute autre violation de grammaire (opérateur pendant, virgule
    /// égarée, jetons restants après l’expression…).
    #[error("erreur de syntaxe: {0}")]
    Syntaxe(String),

    /// Résultat final NaN ou infini (division par zéro, √ d’un négatif,
    /// log d’un non-positif, dépassement).
    #[error("résultat hors domaine (NaN ou infini)")]
    DomaineMath,
}
