use crate::client::DataCenter;
use crate::page::{
    INSTANCES_FOR_LIST_CLASS, INSTANCES_FOR_LIST_ID_PREFIX, INSTANCES_LIST_CLASS,
    INSTANCES_LIST_ID_PREFIX, Page,
};
use crate::render::render_link_list;
use crate::transport::Transport;
use crate::types::LinkRecord;

/// Fill every typeclass instance list on the page with one batched request.
pub async fn annotate_instances<P, T>(page: &P, client: &DataCenter<T>)
where
    P: Page,
    T: Transport,
{
    let lists = page.elements_by_class(INSTANCES_LIST_CLASS);
    if lists.is_empty() {
        return;
    }
    let names = lookup_keys(page, &lists, INSTANCES_LIST_ID_PREFIX);
    let results = client.annotate_instances(&names).await;
    render_aligned(page, &lists, &results, INSTANCES_LIST_CLASS);
}

/// Fill every "instances for type" list on the page with one batched request.
pub async fn annotate_instances_for<P, T>(page: &P, client: &DataCenter<T>)
where
    P: Page,
    T: Transport,
{
    let lists = page.elements_by_class(INSTANCES_FOR_LIST_CLASS);
    if lists.is_empty() {
        return;
    }
    let names = lookup_keys(page, &lists, INSTANCES_FOR_LIST_ID_PREFIX);
    let results = client.annotate_instances_for(&names).await;
    render_aligned(page, &lists, &results, INSTANCES_FOR_LIST_CLASS);
}

/// Run both annotators, letting their requests overlap.
pub async fn annotate_all<P, T>(page: &P, client: &DataCenter<T>)
where
    P: Page,
    T: Transport,
{
    futures::join!(annotate_instances(page, client), annotate_instances_for(page, client));
}

fn lookup_keys<P: Page>(page: &P, lists: &[P::Element], prefix: &str) -> Vec<String> {
    lists
        .iter()
        .map(|list| {
            let id = page.element_id(list);
            id.strip_prefix(prefix).map(str::to_string).unwrap_or_else(|| {
                tracing::warn!(%id, prefix, "list id lacks the expected prefix");
                id.clone()
            })
        })
        .collect()
}

/// Result `i` goes into list `i`; nothing is matched by name.
fn render_aligned<P: Page>(page: &P, lists: &[P::Element], results: &[Vec<LinkRecord>], class: &str) {
    if results.len() != lists.len() {
        tracing::warn!(
            class,
            lists = lists.len(),
            results = results.len(),
            "backend returned a different number of results than lists on the page"
        );
    }
    let site_root = &page.context().site_root;
    for (list, records) in lists.iter().zip(results) {
        page.set_inner_html(list, &render_link_list(site_root, records));
    }
}
