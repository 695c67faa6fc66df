//! UI shell.
//!
//! A table of todos with an inline add form. Every mutation re-fetches the
//! full list from the server; there is no optimistic update. Gateway calls
//! run on the UI thread; the loading flag is advisory, not a mutex.

use std::time::{Duration, Instant};

use todo_domain::{Todo, TodoId};

use crate::config::ClientConfig;
use crate::gateway::Gateway;
use crate::notify::{NotificationKind, Notifier};

pub struct TodoApp {
    gateway: Gateway,
    todos: Vec<Todo>,
    title_input: String,
    loading: bool,
    loaded_once: bool,
    confirm_delete: Option<TodoId>,
    notifier: Notifier,
}

impl TodoApp {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            gateway: Gateway::new(config),
            todos: Vec::new(),
            title_input: String::new(),
            loading: false,
            loaded_once: false,
            confirm_delete: None,
            notifier: Notifier::new(),
        }
    }

    /// Replace the local collection with the server's current list.
    fn refresh(&mut self) {
        self.loading = true;
        let result = self.gateway.fetch_todos();
        self.loading = false;

        match result {
            Ok(todos) => self.todos = todos,
            Err(err) => self.notifier.error(err.to_string()),
        }
    }

    fn add_todo(&mut self) {
        let title = self.title_input.trim().to_string();
        if title.is_empty() {
            self.notifier.error("Please enter todo title");
            return;
        }

        self.loading = true;
        let result = self.gateway.create_todo(&title);
        self.loading = false;

        match result {
            Ok(_) => {
                self.notifier.success("Todo added successfully!");
                self.title_input.clear();
                self.refresh();
            }
            // No refresh on failure; the local list stays as-is.
            Err(err) => self.notifier.error(err.to_string()),
        }
    }

    fn delete_todo(&mut self, id: &TodoId) {
        self.loading = true;
        let result = self.gateway.delete_todo(id.as_str());
        self.loading = false;

        match result {
            Ok(_) => {
                self.notifier.success("Todo deleted!");
                self.refresh();
            }
            Err(err) => self.notifier.error(err.to_string()),
        }
    }

    fn render_notifications(&mut self, ctx: &egui::Context) {
        let banners = self.notifier.visible(Instant::now()).to_vec();
        if banners.is_empty() {
            return;
        }

        egui::TopBottomPanel::bottom("notifications").show(ctx, |ui| {
            for banner in &banners {
                let color = match banner.kind {
                    NotificationKind::Success => egui::Color32::DARK_GREEN,
                    NotificationKind::Error => egui::Color32::RED,
                };
                ui.colored_label(color, &banner.text);
            }
        });
        // Keep repainting while banners are up so they expire on time.
        ctx.request_repaint_after(Duration::from_millis(250));
    }

    fn render_confirm_dialog(&mut self, ctx: &egui::Context) {
        let Some(id) = self.confirm_delete.clone() else {
            return;
        };

        egui::Window::new("Delete this todo?")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        self.confirm_delete = None;
                        self.delete_todo(&id);
                    }
                    if ui.button("No").clicked() {
                        self.confirm_delete = None;
                    }
                });
            });
    }
}

impl eframe::App for TodoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Initial list fetch, exactly once.
        if !self.loaded_once {
            self.loaded_once = true;
            self.refresh();
        }

        self.render_notifications(ctx);
        self.render_confirm_dialog(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Todo App");
            ui.add_space(8.0);

            let mut submitted = false;
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.title_input).hint_text("Enter todo"),
                );
                let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
                if response.lost_focus() && enter_pressed {
                    submitted = true;
                }
                ui.add_enabled_ui(!self.loading, |ui| {
                    if ui.button("Add Todo").clicked() {
                        submitted = true;
                    }
                });
            });
            if submitted {
                self.add_todo();
            }

            ui.add_space(12.0);
            if self.loading {
                ui.spinner();
            }

            let mut pending_delete: Option<TodoId> = None;
            egui::ScrollArea::vertical().max_height(400.0).show(ui, |ui| {
                egui::Grid::new("todo_table")
                    .num_columns(2)
                    .striped(true)
                    .min_col_width(220.0)
                    .show(ui, |ui| {
                        ui.strong("Todo");
                        ui.strong("Actions");
                        ui.end_row();

                        for todo in &self.todos {
                            ui.label(todo.title.as_deref().unwrap_or(""));
                            if ui.button("Delete").clicked() {
                                pending_delete = Some(todo.id.clone());
                            }
                            ui.end_row();
                        }
                    });
            });
            if pending_delete.is_some() {
                self.confirm_delete = pending_delete;
            }
        });
    }
}
