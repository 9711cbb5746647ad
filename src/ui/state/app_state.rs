use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::dataset::Dataset;
use crate::domain::entities::edit::ChangeLogEntry;
use crate::domain::entities::filters::FilterState;
use crate::domain::entities::upload::UploadedTable;

#[derive(Clone, Copy)]
pub struct DashboardState {
    pub dataset: Signal<Dataset>,
    pub filters: Signal<FilterState>,
    pub uploads: Signal<Vec<UploadedTable>>,
    pub change_log: Signal<Vec<ChangeLogEntry>>,
    pub selected_upload: Signal<Option<usize>>,
    pub editing_cell: Signal<Option<(usize, usize)>>,
    pub editing_value: Signal<String>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            dataset: use_signal(Dataset::baseline),
            filters: use_signal(FilterState::default),
            uploads: use_signal(Vec::<UploadedTable>::new),
            change_log: use_signal(Vec::<ChangeLogEntry>::new),
            selected_upload: use_signal(|| None::<usize>),
            editing_cell: use_signal(|| None::<(usize, usize)>),
            editing_value: use_signal(String::new),
            busy: use_signal(|| false),
            status: use_signal(|| "Ready".to_string()),
        }
    }
}
