//! Selection-scope navigation core.
//!
//! Содержит:
//! - `ScopeStore` — четыре реактивные ячейки текущего выбора
//! - `policy` — чистые правила перехода scope при навигации
//! - `breadcrumbs` — проекция (role, page, scope) → хлебные крошки
//! - `NavContext` — единая точка входа для всех переходов между страницами

pub mod breadcrumbs;
pub mod dispatcher;
pub mod policy;
pub mod scope;

pub use dispatcher::{use_nav, NavContext};
pub use scope::ScopeStore;
