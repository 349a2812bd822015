//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Project;

/// State shared between views
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Projects visible to the signed-in user
    pub projects: Vec<Project>,
    /// Whether `projects` has been fetched at least once this session
    pub projects_loaded: bool,
    /// Project picked in Dashboard/Calls; carried across views
    pub selected_project: Option<u32>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the project list and keep the selection valid
pub fn store_set_projects(store: &AppStore, projects: Vec<Project>) {
    let current = store.selected_project().get_untracked();
    let selected = pick_project(&projects, current);
    store.projects().set(projects);
    if selected != current {
        store.selected_project().set(selected);
    }
    if !store.projects_loaded().get_untracked() {
        store.projects_loaded().set(true);
    }
}

/// Forget session-scoped data (on sign out)
pub fn store_clear(store: &AppStore) {
    store.projects().set(Vec::new());
    store.projects_loaded().set(false);
    store.selected_project().set(None);
}

/// Keep a still-listed selection, otherwise the first project
fn pick_project(projects: &[Project], current: Option<u32>) -> Option<u32> {
    current
        .filter(|id| projects.iter().any(|p| p.id == *id))
        .or_else(|| projects.first().map(|p| p.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32) -> Project {
        Project {
            id,
            name: format!("Project {}", id),
            description: None,
            company_id: 1,
            created_at: None,
            is_active: true,
        }
    }

    #[test]
    fn test_pick_project() {
        let projects = vec![project(4), project(7)];
        assert_eq!(pick_project(&projects, None), Some(4));
        assert_eq!(pick_project(&projects, Some(7)), Some(7));
        assert_eq!(pick_project(&projects, Some(99)), Some(4));
        assert_eq!(pick_project(&[], Some(7)), None);
    }
}
