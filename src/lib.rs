pub mod api;
pub mod domain;
pub mod dto;
pub mod forms;
#[cfg(feature = "client")]
pub mod models;
pub mod notifications;
pub mod routes;
pub mod services;
#[cfg(feature = "client")]
pub mod views;

#[cfg(feature = "client")]
pub use client::{RunOptions, run};

#[cfg(feature = "client")]
mod client {
    use crate::api::http::HttpSupplierApi;
    use crate::domain::types::SupplierId;
    use crate::forms::supplier::SupplierField;
    use crate::models::config::ClientConfig;
    use crate::notifications::TerminalNotifier;
    use crate::routes::history::HistoryNavigator;
    use crate::routes::{Navigator, supplier_edit_path};
    use crate::services::ServiceError;
    use crate::services::supplier::SupplierEditPage;
    use crate::views::prompt::{FormAction, confirm_retry, prompt_form};
    use crate::views::render_edit_page;

    /// What the terminal session should do, resolved from the command line.
    #[derive(Debug, Default)]
    pub struct RunOptions {
        pub supplier_id: Option<SupplierId>,
        /// Edits applied after the record has loaded, in order.
        pub overrides: Vec<(SupplierField, String)>,
        pub interactive: bool,
    }

    /// Mounts the supplier edit page against the configured API and drives it
    /// from the terminal until it saves or is cancelled.
    pub fn run(config: ClientConfig, options: RunOptions) -> std::io::Result<()> {
        let api = HttpSupplierApi::new(&config.api_base_url)
            .map_err(|e| std::io::Error::other(format!("Failed to build HTTP client: {e}")))?;

        let navigator = HistoryNavigator::new(config.app_base_path.clone());
        if let Some(id) = &options.supplier_id {
            navigator.navigate(&supplier_edit_path(id));
        }
        let notifier = TerminalNotifier;

        let mut page = SupplierEditPage::new(options.supplier_id);

        if let Err(e) = page.load(&api) {
            show(&page)?;
            return Err(std::io::Error::other(e.to_string()));
        }

        for (field, value) in options.overrides {
            page.set_field(field, value)
                .map_err(|e| std::io::Error::other(e.to_string()))?;
        }

        if !options.interactive {
            show(&page)?;
            return page
                .submit(&api, &navigator, &notifier)
                .map_err(|e| std::io::Error::other(e.to_string()));
        }

        loop {
            show(&page)?;
            let action = prompt_form(&mut page).map_err(std::io::Error::other)?;

            if action == FormAction::Cancel {
                page.cancel(&navigator);
                break;
            }

            match page.submit(&api, &navigator, &notifier) {
                Ok(()) => break,
                Err(ServiceError::Validation(_)) => continue,
                Err(ServiceError::Submit(_)) => {
                    if !confirm_retry().map_err(std::io::Error::other)? {
                        page.cancel(&navigator);
                        break;
                    }
                }
                Err(e) => return Err(std::io::Error::other(e.to_string())),
            }
        }

        if let Some(current) = navigator.current() {
            log::info!("Current location: {current}");
        }
        Ok(())
    }

    fn show(page: &SupplierEditPage) -> std::io::Result<()> {
        let output = render_edit_page(&page.view())
            .map_err(|e| std::io::Error::other(format!("Template rendering error: {e}")))?;
        println!("{output}");
        Ok(())
    }
}
