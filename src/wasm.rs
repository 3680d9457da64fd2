//! Browser entry points.
//!
//! The page bootstrap loads the module and calls `run` with its globals:
//!
//! ```javascript
//! import init, { run } from "./m4doc_client.js";
//! await init();
//! await run(SITE_ROOT, typeof MODULE_NAME === "undefined" ? null : MODULE_NAME);
//! ```

use crate::client::DataCenter;
use crate::controllers;
use crate::page::{DomPage, PageContext};
use crate::transport::FetchTransport;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    crate::tracing::init();
}

fn page(site_root: String, module_name: Option<String>) -> Result<DomPage, JsValue> {
    let context = PageContext {
        site_root,
        module_name,
    };
    DomPage::current(context).ok_or_else(|| JsValue::from_str("no document available"))
}

/// Fill the imported-by list and all instance lists on the current page.
#[wasm_bindgen]
pub async fn run(site_root: String, module_name: Option<String>) -> Result<(), JsValue> {
    let page = page(site_root, module_name)?;
    let client = DataCenter::init(FetchTransport::new());
    controllers::run_all(&page, &client).await;
    Ok(())
}

/// Fill only the imported-by list.
#[wasm_bindgen(js_name = fillImportedBy)]
pub async fn fill_imported_by(site_root: String, module_name: Option<String>) -> Result<(), JsValue> {
    let page = page(site_root, module_name)?;
    let client = DataCenter::init(FetchTransport::new());
    controllers::fill_imported_by(&page, &client).await;
    Ok(())
}

/// Fill only the instance lists.
#[wasm_bindgen(js_name = annotateInstances)]
pub async fn annotate_instances(site_root: String) -> Result<(), JsValue> {
    let page = page(site_root, None)?;
    let client = DataCenter::init(FetchTransport::new());
    controllers::annotate_all(&page, &client).await;
    Ok(())
}
