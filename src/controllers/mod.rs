//! Page controllers: single passes over a page that fill placeholder lists.

mod imported_by;
mod instances;

pub use imported_by::fill_imported_by;
pub use instances::{annotate_all, annotate_instances, annotate_instances_for};

use crate::client::DataCenter;
use crate::page::Page;
use crate::transport::Transport;

/// Run every controller once against `page`.
pub async fn run_all<P, T>(page: &P, client: &DataCenter<T>)
where
    P: Page,
    T: Transport,
{
    futures::join!(fill_imported_by(page, client), annotate_all(page, client));
}
