use crate::client::DataCenter;
use crate::page::{IMPORTED_BY_LIST_CLASS, Page};
use crate::render::render_link_list;
use crate::transport::Transport;

/// Fill the imported-by list of a module page.
///
/// Pages without a module name are left alone and no request is made.
pub async fn fill_imported_by<P, T>(page: &P, client: &DataCenter<T>)
where
    P: Page,
    T: Transport,
{
    let Some(module_name) = page.context().module_name() else {
        return;
    };
    let Some(list) = page.first_by_class(IMPORTED_BY_LIST_CLASS) else {
        tracing::debug!(module = module_name, "page has no imported-by list");
        return;
    };

    let importers = client.linked_imported_by(module_name).await;
    tracing::debug!(module = module_name, count = importers.len(), "rendering imported-by list");

    let html = render_link_list(&page.context().site_root, &importers);
    page.set_inner_html(&list, &html);
}
