// src/noyau/jetons.rs
//
// Étapes lexicales du pipeline : nettoyage, validation, tokenisation.
//
// - nettoyer  : glyphes alternatifs (×, ÷, −) -> ASCII, espaces retirés
// - valider   : classe de caractères permise, AVANT toute analyse
//               (le tokenizer n’a donc jamais à se défendre d’un
//               caractère hors alphabet)
// - tokenize  : un seul balayage gauche -> droite
//
// Le tokenizer ne fait AUCUNE résolution sémantique : il ne sait pas
// encore si un identifiant nomme une fonction ou une constante.

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    Num(f64),

    // Identifiant = course MAXIMALE de lettres ("pie" reste un seul jeton,
    // jamais "pi" + "e"). La résolution viendra à l’analyse.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Caret,   // ^
    Percent, // % (reste flottant, palier de * et /)
    Comma,

    LPar,
    RPar,
}

/// Normalise les glyphes d’opérateurs visuellement distincts et retire
/// tous les espaces. Fonction totale : aucune erreur possible.
pub fn nettoyer(brut: &str) -> String {
    brut.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            '−' => '-',
            autre => autre,
        })
        .collect()
}

fn caractere_permis(c: char) -> bool {
    c.is_ascii_digit()
        || c.is_ascii_alphabetic()
        || matches!(
            c,
            '+' | '-' | '*' | '/' | '^' | '(' | ')' | '.' | ',' | '%'
        )
}

/// Rejette toute entrée contenant un caractère hors de la classe
/// `[0-9+-*/^().,%A-Za-z]` (signe degré, lettres non-ASCII, contrôles…).
pub fn valider(s: &str) -> Result<(), ErreurEval> {
    match s.chars().find(|c| !caractere_permis(*c)) {
        Some(c) => Err(ErreurEval::CaractereInvalide(c)),
        None => Ok(()),
    }
}

/// Tokenize une chaîne nettoyée et validée en jetons.
/// Supporte :
/// - nombres décimaux (ex: 12, 3.5, .5) — UN seul point autorisé
/// - opérateurs + - * / ^ %
/// - parenthèses ( ) et virgule
/// - identifiants [A-Za-z]+ (course maximale de lettres)
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Jetons mono-caractère
        match c {
            '+' => {
                out.push(Jeton::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Jeton::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Jeton::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Jeton::Slash);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Jeton::Caret);
                i += 1;
                continue;
            }
            '%' => {
                out.push(Jeton::Percent);
                i += 1;
                continue;
            }
            ',' => {
                out.push(Jeton::Comma);
                i += 1;
                continue;
            }
            '(' => {
                out.push(Jeton::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Jeton::RPar);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Identifiants ASCII : course maximale de lettres
        if c.is_ascii_alphabetic() {
            let debut = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let mot: String = chars[debut..i].iter().collect();
            out.push(Jeton::Ident(mot));
            continue;
        }

        // Nombre : course de chiffres et de points
        if c.is_ascii_digit() || c == '.' {
            let debut = i;
            let mut chiffres = 0usize;
            let mut points = 0usize;

            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                if chars[i] == '.' {
                    points += 1;
                } else {
                    chiffres += 1;
                }
                i += 1;
            }

            let texte: String = chars[debut..i].iter().collect();
            if chiffres == 0 || points > 1 {
                return Err(ErreurEval::NombreMalForme(texte));
            }

            let v: f64 = texte
                .parse()
                .map_err(|_| ErreurEval::NombreMalForme(texte))?;
            out.push(Jeton::Num(v));
            continue;
        }

        // Inatteignable après valider() — on garde quand même l’erreur.
        return Err(ErreurEval::CaractereInvalide(c));
    }

    Ok(out)
}
