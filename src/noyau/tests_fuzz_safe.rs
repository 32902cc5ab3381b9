//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - expressions GRAMMATICALES générées : seul échec admis, DomaineMath
//!   (division par zéro, dépassement aléatoires)
//! - soupe de caractères : le moteur retourne toujours, jamais de panique

use std::time::{Duration, Instant};

use super::erreur::ErreurEval;
use super::evaluer;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let n = rng.pick(100);
    if rng.coin() {
        format!("{n}")
    } else {
        let d = rng.pick(100);
        format!("{n}.{d:02}")
    }
}

fn gen_atome(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 | 1 => gen_nombre(rng),
        2 => "pi".to_string(),
        3 => "e".to_string(),
        4 => "sqrt(2)".to_string(),
        _ => "sin(90)".to_string(),
    }
}

fn gen_expr(rng: &mut Rng, profondeur: usize) -> String {
    if profondeur == 0 {
        return gen_atome(rng);
    }

    match rng.pick(10) {
        0 => gen_atome(rng),
        1 => format!(
            "({}+{})",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        2 => format!(
            "({}-{})",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        3 => format!(
            "({}*{})",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        4 => format!(
            "({}/{})",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        5 => format!(
            "({}%{})",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        6 => format!("({}^{})", gen_expr(rng, profondeur - 1), rng.pick(5)),
        7 => format!("-{}", gen_expr(rng, profondeur - 1)),
        8 => format!("cos({})", gen_expr(rng, profondeur - 1)),
        _ => format!("ln({})", gen_expr(rng, profondeur - 1)),
    }
}

/* ------------------------ Soupe de caractères ------------------------ */

const SOUPE: &[char] = &[
    '0', '1', '2', '7', '9', '+', '-', '*', '/', '^', '(', ')', '.', ',', '%', 'a', 'e', 'i', 'l',
    'n', 'o', 'p', 's', 'q', 'r', 't', 'x', ' ', '°', '×', '÷', '−', '#', 'é',
];

fn gen_soupe(rng: &mut Rng) -> String {
    let longueur = rng.pick(30) as usize;
    (0..longueur)
        .map(|_| SOUPE[rng.pick(SOUPE.len() as u32) as usize])
        .collect()
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_grammaticales_ok_ou_domaine() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        match evaluer(&expr) {
            Ok(v) => {
                assert!(v.is_finite(), "Ok non fini pour {expr:?}");
                vus_ok += 1;
            }
            // Expression grammaticale : seule la sortie du domaine est
            // admissible (division par zéro, ln d’un négatif, dépassement).
            Err(ErreurEval::DomaineMath) => vus_err += 1,
            Err(e) => panic!("erreur inattendue: expr={expr:?} err={e}"),
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(vus_ok > 20, "trop peu de succès: {vus_ok}");
    assert!(vus_err > 0, "aucune sortie de domaine vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_soupe_jamais_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut vus_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let soupe = gen_soupe(&mut rng);

        // Retourner suffit (Ok ou Err) ; le même texte redonne le même
        // résultat (aucun état caché dans le pipeline).
        let premier = evaluer(&soupe);
        let second = evaluer(&soupe);
        assert_eq!(premier, second, "non déterministe pour {soupe:?}");

        if premier.is_err() {
            vus_err += 1;
        }
    }

    assert!(vus_err > 50, "soupe trop propre: {vus_err} erreurs seulement");
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("0.5", 800);
    budget(t0, max);

    let v = evaluer(&expr).unwrap_or_else(|e| panic!("err: {e}"));

    // 800 * 0.5 = 400
    assert_eq!(v, 400.0);
}
