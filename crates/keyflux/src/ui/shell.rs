use crate::ui::key_manager_view::KeyManagerView;
use gpui::*;
use gpui_component::Root;
use keyflux_core::KeyStore;
use log::info;
use std::sync::Arc;

/// Open the single application window with the key manager mounted under
/// the component root.
pub fn open_main_window(store: Arc<dyn KeyStore>, cx: &mut App) -> anyhow::Result<()> {
    let title = format!("Firebase Key Manager - {}", store.endpoint());

    cx.open_window(
        WindowOptions {
            app_id: Some("keyflux".into()),
            titlebar: Some(TitlebarOptions {
                title: Some(title.into()),
                ..Default::default()
            }),
            ..Default::default()
        },
        |window, cx| {
            let view = cx.new(|cx| KeyManagerView::new(store, window, cx));
            info!("Key manager mounted");

            cx.new(|cx| Root::new(view, window, cx))
        },
    )?;

    Ok(())
}
