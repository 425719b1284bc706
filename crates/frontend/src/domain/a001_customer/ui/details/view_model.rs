use contracts::domain::a001_customer::{Customer, CustomerDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_customer::api;

#[derive(Clone, Copy)]
pub struct CustomerDetailsViewModel {
    pub customer_id: RwSignal<Option<i64>>,
    pub name: RwSignal<String>,
    pub industry: RwSignal<String>,
    pub region: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
}

impl CustomerDetailsViewModel {
    pub fn new(existing: Option<&Customer>) -> Self {
        let dto = existing.map(CustomerDto::from_customer).unwrap_or_default();
        Self {
            customer_id: RwSignal::new(existing.map(|c| c.id)),
            name: RwSignal::new(dto.name),
            industry: RwSignal::new(dto.industry),
            region: RwSignal::new(dto.region),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.customer_id.get_untracked().is_some()
    }

    fn dto(&self) -> CustomerDto {
        CustomerDto {
            name: self.name.get(),
            industry: self.industry.get(),
            region: self.region.get(),
        }
    }

    /// Validate, then create or update and report back through `on_saved`
    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = match self.dto().validate() {
            Ok(dto) => dto,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        let id = self.customer_id.get_untracked();
        let error = self.error;
        let is_saving = self.is_saving;
        is_saving.set(true);
        error.set(None);

        spawn_local(async move {
            let result = match id {
                Some(id) => api::update_customer(id, &dto).await,
                None => api::create_customer(&dto).await,
            };
            is_saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("Failed to save customer: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    }
}
