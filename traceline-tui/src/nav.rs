//! Navigation and view switching utilities.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    Login,
    Dashboard,
    Documents,
    Nonconformances,
    Capas,
    Audits,
    Items,
    WorkOrders,
    Inventory,
    Users,
    Registers,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Login => "Login",
            View::Dashboard => "Dashboard",
            View::Documents => "Documents",
            View::Nonconformances => "Nonconformances",
            View::Capas => "CAPAs",
            View::Audits => "Audits",
            View::Items => "Items",
            View::WorkOrders => "Work Orders",
            View::Inventory => "Inventory",
            View::Users => "Users",
            View::Registers => "Registers",
        }
    }

    /// Views reachable by tab/digit navigation. Login is entered only by the
    /// auth boundary.
    pub fn all() -> &'static [View] {
        &[
            View::Dashboard,
            View::Documents,
            View::Nonconformances,
            View::Capas,
            View::Audits,
            View::Items,
            View::WorkOrders,
            View::Inventory,
            View::Users,
            View::Registers,
        ]
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<View> {
        Self::all().get(index).copied()
    }

    pub fn next(&self) -> View {
        let idx = self.index();
        let all = Self::all();
        all[(idx + 1) % all.len()]
    }

    pub fn previous(&self) -> View {
        let idx = self.index();
        let all = Self::all();
        let prev = if idx == 0 { all.len() - 1 } else { idx - 1 };
        all[prev]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_previous_cycle() {
        let first = View::all()[0];
        let last = View::all()[View::all().len() - 1];
        assert_eq!(last.next(), first);
        assert_eq!(first.previous(), last);
    }

    #[test]
    fn login_is_not_reachable_by_index() {
        assert!(!View::all().contains(&View::Login));
        assert_eq!(View::Login.index(), 0);
    }
}
