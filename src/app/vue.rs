// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Évaluation live à chaque frappe (resp.changed)
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Historique cliquable : rejoue l’expression archivée

use eframe::egui;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2^3^2, sin(90), ln(pi), (2+3)*4")
                .id_source("entree_edit")
                .code_editor(),
        );

        // Frappe clavier : réévaluation immédiate.
        if resp.changed() {
            self.rafraichir();
        }

        // Si on a cliqué un bouton (pavé / fonctions / etc.), on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        // On évite les déclenchements “globaux” quand l’utilisateur clique ailleurs.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.valider_entree();
        }

        ui.add_space(6.0);

        // Affichage live : résultat formaté, ou l’indicateur générique.
        ui.label("Résultat :");
        Self::champ_monospace(ui, "affichage_out", &self.affichage, 1);

        ui.add_space(8.0);

        // Fonctions + constantes + parenthèses
        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "sin", "sin(");
            self.bouton_insert(ui, "cos", "cos(");
            self.bouton_insert(ui, "tan", "tan(");
            self.bouton_insert(ui, "sqrt", "sqrt(");
            self.bouton_insert(ui, "log", "log(");
            self.bouton_insert(ui, "ln", "ln(");

            ui.separator();

            self.bouton_insert(ui, "pi", "pi");
            self.bouton_insert(ui, "e", "e");

            ui.separator();

            self.bouton_insert(ui, "(", "(");
            self.bouton_insert(ui, ")", ")");
            self.bouton_insert(ui, "^", "^");
        });

        ui.add_space(8.0);

        // Pavé numérique
        self.ui_pave_numerique(ui);
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_action(ui, "C", "Efface l’entrée", Action::Effacer);
                self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Retour);
                self.bouton_action(ui, "%", "Ajoute *0.01 à l’entrée", Action::Pourcent);
                self.bouton_insert(ui, "/", "/");
                ui.end_row();

                self.bouton_insert(ui, "7", "7");
                self.bouton_insert(ui, "8", "8");
                self.bouton_insert(ui, "9", "9");
                self.bouton_insert(ui, "*", "*");
                ui.end_row();

                self.bouton_insert(ui, "4", "4");
                self.bouton_insert(ui, "5", "5");
                self.bouton_insert(ui, "6", "6");
                self.bouton_insert(ui, "-", "-");
                ui.end_row();

                self.bouton_insert(ui, "1", "1");
                self.bouton_insert(ui, "2", "2");
                self.bouton_insert(ui, "3", "3");
                self.bouton_insert(ui, "+", "+");
                ui.end_row();

                self.bouton_insert(ui, "0", "0");
                self.bouton_insert(ui, ".", ".");
                self.bouton_action(ui, "=", "Évalue et archive", Action::Valider);
                ui.label("");
                ui.end_row();
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Historique :");
            self.bouton_action(ui, "Vider", "Efface tout l’historique", Action::ViderHistorique);
        });

        if self.historique.is_empty() {
            ui.monospace("(vide)");
            return;
        }

        // Clic sur une ligne => rejoue l’expression. On collecte l’index
        // cliqué pour ne pas muter self pendant l’itération.
        let mut rappel: Option<usize> = None;

        for (i, calcul) in self.historique.iter().enumerate() {
            let ligne = format!("{} = {}", calcul.expression, calcul.resultat);
            let resp = ui
                .add(egui::Button::new(egui::RichText::new(ligne).monospace()).frame(false))
                .on_hover_text("Rejouer cette expression");
            if resp.clicked() {
                rappel = Some(i);
            }
        }

        if let Some(i) = rappel {
            self.rappeler(i);
        }
    }

    /* ------------------------ Briques ------------------------ */

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::Effacer => self.effacer(),
                Action::Retour => self.retour(),
                Action::Pourcent => self.pourcent(),
                Action::Valider => self.valider_entree(),
                Action::ViderHistorique => self.vider_historique(),
            }
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, texte: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.inserer(texte);
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Effacer,
    Retour,
    Pourcent,
    Valider,
    ViderHistorique,
}
