// src/noyau/tables.rs
//
// Tables fixes du moteur : fonctions unaires + constantes nommées.
// Figées à la compilation, jamais modifiables depuis l’entrée utilisateur.
//
// Convention héritée de la calculatrice d’origine :
// - sin/cos/tan prennent des DEGRÉS (conversion en radians ici même)
// - log = base 10, ln = logarithme naturel
// - recherche par nom exact (pas de repli de casse : "SIN" est inconnu)

use std::f64::consts;

fn en_radians(degres: f64) -> f64 {
    degres * consts::PI / 180.0
}

fn sin_degres(x: f64) -> f64 {
    en_radians(x).sin()
}

fn cos_degres(x: f64) -> f64 {
    en_radians(x).cos()
}

fn tan_degres(x: f64) -> f64 {
    en_radians(x).tan()
}

fn racine(x: f64) -> f64 {
    x.sqrt()
}

fn log_decimal(x: f64) -> f64 {
    x.log10()
}

fn log_naturel(x: f64) -> f64 {
    x.ln()
}

/// Table des fonctions : nom -> opération pure f64 -> f64.
pub fn fonction(nom: &str) -> Option<fn(f64) -> f64> {
    match nom {
        "sin" => Some(sin_degres),
        "cos" => Some(cos_degres),
        "tan" => Some(tan_degres),
        "sqrt" => Some(racine),
        "log" => Some(log_decimal),
        "ln" => Some(log_naturel),
        _ => None,
    }
}

/// Table des constantes : nom -> valeur fixe.
pub fn constante(nom: &str) -> Option<f64> {
    match nom {
        "pi" => Some(consts::PI),
        "e" => Some(consts::E),
        _ => None,
    }
}

/// Identifiants reconnus comme fonctions (unaire).
pub fn est_fonction(nom: &str) -> bool {
    fonction(nom).is_some()
}
