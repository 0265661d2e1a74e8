use crate::ui::tokens::{FontSizes, Heights, Radii, Spacing};
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::button::{Button, ButtonVariant, ButtonVariants};
use gpui_component::input::{Input, InputEvent, InputState};
use gpui_component::scroll::ScrollableElement;
use gpui_component::{ActiveTheme, Sizable, Theme};
use keyflux_app::{KeyManager, KeyRow, StatusKind, StatusMessage};
use keyflux_core::KeyStore;
use std::sync::Arc;

const SUCCESS_COLOR: u32 = 0x22C55E;
const ERROR_COLOR: u32 = 0xEF4444;

/// Lists every top-level key of the store and edits one value at a time.
///
/// Store calls run on the background executor and are never cancelled;
/// their results are folded into `KeyManager` in completion order.
pub struct KeyManagerView {
    store: Arc<dyn KeyStore>,
    manager: KeyManager,
    focus_handle: FocusHandle,

    // Inline value editing
    edit_input: Option<Entity<InputState>>,
    _edit_subscription: Option<Subscription>,
}

impl KeyManagerView {
    pub fn new(store: Arc<dyn KeyStore>, _window: &mut Window, cx: &mut Context<Self>) -> Self {
        let mut view = Self {
            store,
            manager: KeyManager::new(),
            focus_handle: cx.focus_handle(),
            edit_input: None,
            _edit_subscription: None,
        };

        view.load_keys(cx);
        view
    }

    fn load_keys(&mut self, cx: &mut Context<Self>) {
        let store = self.store.clone();
        let entity = cx.entity().clone();

        log::info!("Fetching keys from {}", store.endpoint());

        cx.spawn(async move |_this, cx| {
            let result = cx
                .background_executor()
                .spawn(async move { store.read_all() })
                .await;

            cx.update(|cx| {
                entity.update(cx, |this, cx| {
                    this.manager.finish_load(result);
                    cx.notify();
                });
            })
            .ok();
        })
        .detach();
    }

    fn start_edit(&mut self, key: &str, window: &mut Window, cx: &mut Context<Self>) {
        if !self.manager.begin_edit(key) {
            return;
        }

        let text = self
            .manager
            .edit_session()
            .map(|edit| edit.buffer.clone())
            .unwrap_or_default();

        let input = cx.new(|cx| {
            let mut state = InputState::new(window, cx);
            state.set_value(text, window, cx);
            state
        });
        input.update(cx, |state, cx| {
            state.focus(window, cx);
        });

        self._edit_subscription = Some(cx.subscribe_in(
            &input,
            window,
            |this, input, event: &InputEvent, window, cx| match event {
                InputEvent::Change => {
                    let text = input.read(cx).value().to_string();
                    this.manager.update_buffer(text);
                    cx.notify();
                }
                InputEvent::PressEnter { .. } => this.save(window, cx),
                _ => {}
            },
        ));

        self.edit_input = Some(input);
        cx.notify();
    }

    fn save(&mut self, _window: &mut Window, cx: &mut Context<Self>) {
        let Some(request) = self.manager.save() else {
            return;
        };

        let store = self.store.clone();
        let entity = cx.entity().clone();
        let write = request.clone();

        cx.spawn(async move |_this, cx| {
            let result = cx
                .background_executor()
                .spawn(async move { store.write_value(&write.key, &write.value) })
                .await;

            cx.update(|cx| {
                entity.update(cx, |this, cx| {
                    this.manager.finish_save(&request, result);
                    this.sync_edit_input();
                    cx.notify();
                });
            })
            .ok();
        })
        .detach();
    }

    /// Drop the input once the manager has closed the edit session.
    fn sync_edit_input(&mut self) {
        if self.manager.edit_session().is_none() {
            self.edit_input = None;
            self._edit_subscription = None;
        }
    }

    fn render_row(&self, row: KeyRow, theme: &Theme, cx: &mut Context<Self>) -> Div {
        let key = row.key.clone();

        let mut el = div()
            .min_h(Heights::ROW)
            .flex()
            .items_center()
            .justify_between()
            .gap(Spacing::MD)
            .child(
                div()
                    .font_weight(FontWeight::SEMIBOLD)
                    .whitespace_nowrap()
                    .child(format!("{}:", row.key)),
            );

        let editing_input = self.edit_input.as_ref().filter(|_| row.is_editing);

        if let Some(input) = editing_input {
            el = el
                .child(div().flex_1().child(Input::new(input).small().w_full()))
                .child(
                    Button::new(SharedString::from(format!("save-{}", key)))
                        .label("Save")
                        .small()
                        .with_variant(ButtonVariant::Primary)
                        .on_click(cx.listener(|this, _, window, cx| {
                            this.save(window, cx);
                        })),
                );
        } else {
            el = el
                .child(
                    div()
                        .flex_1()
                        .overflow_hidden()
                        .text_ellipsis()
                        .text_color(theme.muted_foreground)
                        .child(row.display_value),
                )
                .child(
                    Button::new(SharedString::from(format!("edit-{}", key)))
                        .label("Edit")
                        .small()
                        .with_variant(ButtonVariant::Ghost)
                        .on_click(cx.listener(move |this, _, window, cx| {
                            this.start_edit(&key, window, cx);
                        })),
                );
        }

        el
    }
}

impl Focusable for KeyManagerView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for KeyManagerView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme().clone();
        let status = self.manager.status().cloned();
        let rows = self.manager.rows();

        let mut list = div().flex().flex_col().gap(Spacing::LG);
        for row in rows {
            list = list.child(self.render_row(row, &theme, cx));
        }

        div()
            .size_full()
            .track_focus(&self.focus_handle)
            .bg(theme.background)
            .text_color(theme.foreground)
            .text_size(FontSizes::BASE)
            .overflow_y_scrollbar()
            .flex()
            .justify_center()
            .child(
                div()
                    .w_full()
                    .max_w(px(448.0))
                    .p(Spacing::LG)
                    .flex()
                    .flex_col()
                    .gap(Spacing::LG)
                    .child(
                        div()
                            .text_size(FontSizes::TITLE)
                            .font_weight(FontWeight::BOLD)
                            .child("Firebase Key Manager"),
                    )
                    .when_some(status, |el, status| {
                        el.child(render_status_banner(&status, &theme))
                    })
                    .child(list),
            )
    }
}

fn render_status_banner(status: &StatusMessage, theme: &Theme) -> Div {
    let accent: Hsla = match status.kind {
        StatusKind::Success => gpui::rgb(SUCCESS_COLOR).into(),
        StatusKind::Error => gpui::rgb(ERROR_COLOR).into(),
    };

    div()
        .flex()
        .items_center()
        .gap(Spacing::SM)
        .px(Spacing::MD)
        .py(Spacing::SM)
        .rounded(Radii::LG)
        .border_1()
        .border_color(accent)
        .bg(accent.opacity(0.15))
        .text_color(theme.foreground)
        .child(
            div()
                .font_weight(FontWeight::BOLD)
                .text_color(accent)
                .child(status.kind.title()),
        )
        .child(div().flex_1().child(status.text.clone()))
}
