#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    native::run().await
}

// The browser build is driven through the library's `run` export.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use clap::Parser;
    use m4doc_client::cli::{Cli, Commands};
    use m4doc_client::config::ClientConfig;
    use m4doc_client::render::render_link_list;
    use m4doc_client::{DataCenter, HttpTransport, LinkRecord, SearchRequest};
    use serde::Serialize;

    pub(crate) async fn run() -> anyhow::Result<()> {
        let cli = Cli::parse();
        m4doc_client::tracing::init();

        let mut config = ClientConfig::load(cli.config.as_deref())?;
        config.apply_overrides(cli.base_url, cli.site_root);
        tracing::debug!(base_url = %config.base_url, "using backend");

        let client = DataCenter::init(HttpTransport::new(config.base_url.as_str()));
        let output = Output {
            html: cli.html,
            site_root: &config.site_root,
        };

        match cli.command {
            Commands::Search {
                pattern,
                fuzzy,
                kinds,
                max,
            } => {
                let mut request = if fuzzy {
                    SearchRequest::fuzzy(pattern)
                } else {
                    SearchRequest::strict(pattern)
                };
                if !kinds.is_empty() {
                    request = request.with_kinds(kinds);
                }
                request.max_results = max;
                output.json(&client.search(&request).await)
            }
            Commands::InstancesForClass { class_name } => {
                output.json(&client.instances_for_class(&class_name).await)
            }
            Commands::InstancesForType { type_name } => {
                output.json(&client.instances_for_type(&type_name).await)
            }
            Commands::AnnotateInstances { names } => {
                output.batched(&names, &client.annotate_instances(&names).await)
            }
            Commands::AnnotateInstancesFor { names } => {
                output.batched(&names, &client.annotate_instances_for(&names).await)
            }
            Commands::DeclLink { decl_name } => {
                output.json(&client.decl_name_to_link(&decl_name).await)
            }
            Commands::ImportedBy { module_name } => {
                output.json(&client.module_imported_by(&module_name).await)
            }
            Commands::ModuleLink { module_name } => {
                output.json(&client.module_name_to_link(&module_name).await)
            }
            Commands::LinkedImportedBy { module_name } => {
                output.links(&client.linked_imported_by(&module_name).await)
            }
        }
    }

    struct Output<'a> {
        html: bool,
        site_root: &'a str,
    }

    impl Output<'_> {
        fn json<T: Serialize + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
            println!("{}", serde_json::to_string_pretty(value)?);
            Ok(())
        }

        fn links(&self, records: &[LinkRecord]) -> anyhow::Result<()> {
            if self.html {
                println!("{}", render_link_list(self.site_root, records));
                Ok(())
            } else {
                self.json(records)
            }
        }

        fn batched(&self, names: &[String], results: &[Vec<LinkRecord>]) -> anyhow::Result<()> {
            if !self.html {
                return self.json(results);
            }
            for (name, records) in names.iter().zip(results) {
                println!("<!-- {} -->", name);
                println!("{}", render_link_list(self.site_root, records));
            }
            Ok(())
        }
    }
}
