//! Tests de propriétés (campagne) : valeurs, taxonomie d’erreurs, bornes.
//!
//! Chaque propriété observable du moteur est couverte ici :
//! - valeurs exactes pour l’arithmétique entière sur f64
//! - tolérance 1e-9 pour la trigonométrie / les logarithmes
//! - la SORTE d’erreur compte, pas seulement l’échec
//! - aller-retour format -> evaluer (réaffichage d’un résultat)
//! - déterminisme (aucun état caché)

use super::erreur::ErreurEval;
use super::{evaluer, formater};

fn eval_ok(s: &str) -> f64 {
    evaluer(s).unwrap_or_else(|e| panic!("evaluer({s:?}) erreur: {e}"))
}

fn eval_err(s: &str) -> ErreurEval {
    match evaluer(s) {
        Ok(v) => panic!("evaluer({s:?}) aurait dû échouer, a donné {v}"),
        Err(e) => e,
    }
}

fn assert_proche(s: &str, attendu: f64) {
    let v = eval_ok(s);
    assert!(
        (v - attendu).abs() < 1e-9,
        "evaluer({s:?}) = {v}, attendu ≈ {attendu}"
    );
}

/* ------------------------ Constantes ------------------------ */

#[test]
fn constantes_nommees() {
    assert_proche("pi", std::f64::consts::PI);
    assert_proche("e", std::f64::consts::E);
    assert_proche("2*pi", 2.0 * std::f64::consts::PI);
    assert_proche("pi/e", std::f64::consts::PI / std::f64::consts::E);
}

#[test]
fn frontiere_des_identifiants() {
    // Course maximale : "pie" est UN identifiant, jamais "pi" + "e".
    assert_eq!(
        eval_err("pie"),
        ErreurEval::IdentifiantInconnu("pie".into())
    );
    // Et la recherche est sensible à la casse.
    assert_eq!(eval_err("PI"), ErreurEval::IdentifiantInconnu("PI".into()));
}

/* ------------------------ Fonctions (degrés pour la trig) ------------------------ */

#[test]
fn trig_en_degres() {
    assert_proche("sin(90)", 1.0);
    assert_proche("sin(30)", 0.5);
    assert_proche("cos(0)", 1.0);
    assert_proche("cos(60)", 0.5);
    assert_proche("tan(45)", 1.0);
    assert_proche("sin(180)", 0.0);
}

#[test]
fn racine_et_logarithmes() {
    assert_proche("sqrt(16)", 4.0);
    assert_proche("sqrt(2)", std::f64::consts::SQRT_2);
    assert_proche("log(100)", 2.0);
    assert_proche("log(1000)", 3.0);
    assert_proche("ln(e)", 1.0);
    assert_proche("ln(pi)", std::f64::consts::PI.ln());
}

#[test]
fn fonctions_composees() {
    assert_proche("sqrt(sin(90))", 1.0);
    assert_proche("2*sin(30)+cos(0)", 2.0);
    assert_proche("sin(45)^2+cos(45)^2", 1.0);
}

/* ------------------------ Taxonomie d’erreurs ------------------------ */

#[test]
fn erreur_caractere_invalide() {
    assert_eq!(eval_err("2°"), ErreurEval::CaractereInvalide('°'));
    assert_eq!(eval_err("2#3"), ErreurEval::CaractereInvalide('#'));
    assert_eq!(eval_err("2=2"), ErreurEval::CaractereInvalide('='));
}

#[test]
fn erreur_nombre_mal_forme() {
    assert!(matches!(eval_err("1..2"), ErreurEval::NombreMalForme(_)));
    assert!(matches!(eval_err("."), ErreurEval::NombreMalForme(_)));
    assert!(matches!(eval_err("3.4.5"), ErreurEval::NombreMalForme(_)));
}

#[test]
fn erreur_identifiant_inconnu() {
    assert_eq!(
        eval_err("2+foo"),
        ErreurEval::IdentifiantInconnu("foo".into())
    );
    // Inconnu en position d’appel aussi.
    assert_eq!(
        eval_err("foo(2)"),
        ErreurEval::IdentifiantInconnu("foo".into())
    );
    assert_eq!(
        eval_err("SIN(90)"),
        ErreurEval::IdentifiantInconnu("SIN".into())
    );
}

#[test]
fn erreur_parenthese_non_fermee() {
    assert_eq!(eval_err("(2+3"), ErreurEval::ParentheseNonFermee);
    assert_eq!(eval_err("sin(90"), ErreurEval::ParentheseNonFermee);
    assert_eq!(eval_err("((1+2)"), ErreurEval::ParentheseNonFermee);
}

#[test]
fn erreur_syntaxe() {
    // opérateur pendant
    assert!(matches!(eval_err("2++2"), ErreurEval::Syntaxe(_)));
    assert!(matches!(eval_err("2+"), ErreurEval::Syntaxe(_)));
    assert!(matches!(eval_err("*2"), ErreurEval::Syntaxe(_)));
    // virgule égarée
    assert!(matches!(eval_err("2,3"), ErreurEval::Syntaxe(_)));
    // fonction sans parenthèse
    assert!(matches!(eval_err("sin90"), ErreurEval::Syntaxe(_)));
    // jetons restants après l’expression
    assert!(matches!(eval_err("2)"), ErreurEval::Syntaxe(_)));
    assert!(matches!(eval_err("2(3)"), ErreurEval::Syntaxe(_)));
    // groupe vide
    assert!(matches!(eval_err("()"), ErreurEval::Syntaxe(_)));
}

#[test]
fn erreur_domaine_math() {
    assert_eq!(eval_err("1/0"), ErreurEval::DomaineMath);
    assert_eq!(eval_err("0/0"), ErreurEval::DomaineMath);
    assert_eq!(eval_err("sqrt(-1)"), ErreurEval::DomaineMath);
    assert_eq!(eval_err("ln(0)"), ErreurEval::DomaineMath);
    assert_eq!(eval_err("log(-5)"), ErreurEval::DomaineMath);
    // dépassement : résultat infini
    assert_eq!(eval_err("2^10000"), ErreurEval::DomaineMath);
}

/* ------------------------ Pourcent : opérateur vs bouton ------------------------ */

#[test]
fn pourcent_operateur_reste() {
    // `%` DANS la grammaire : reste flottant, palier de * et /.
    assert_eq!(eval_ok("10%3"), 1.0);
    assert_eq!(eval_ok("10%3*2"), 2.0);
}

#[test]
fn pourcent_bouton_texte() {
    // Le bouton % de la vue ajoute le texte "*0.01" à l’entrée brute.
    // Le moteur ne voit que le résultat de cette transformation.
    assert_eq!(eval_ok("50*0.01"), 0.5);
    assert_eq!(eval_ok("200*0.01*0.01"), 0.02);
}

/* ------------------------ Aller-retour format -> evaluer ------------------------ */

#[test]
fn reaffichage_aller_retour() {
    // Un résultat affiché, réinjecté dans le pipeline, redonne la même
    // valeur (le `=` remplace l’entrée par le résultat formaté).
    for s in [
        "2+2",
        "2^3^2",
        "9/2",
        "1/3",
        "-5+3",
        "0.1+0.2",
        "sqrt(2)",
        "ln(pi)",
        "10%3",
    ] {
        let v = eval_ok(s);
        let affiche = formater(v);
        let retour = eval_ok(&affiche);
        assert_eq!(
            retour, v,
            "aller-retour raté pour {s:?} (affiché {affiche:?})"
        );
    }
}

/* ------------------------ Déterminisme ------------------------ */

#[test]
fn determinisme_sans_etat_cache() {
    for s in ["2+2", "sin(90)", "1/0", "2+foo", "", "pie"] {
        assert_eq!(evaluer(s), evaluer(s), "deux appels divergent pour {s:?}");
    }
}
