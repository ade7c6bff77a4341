use catalog::{BrowseState, CatalogConfig, CreatureRecord, Resolution};
use leptos::{prelude::*, task::spawn_local};

use crate::http::GlooFetch;

mod http;
mod logging;

fn main() {
    console_error_panic_hook::set_once();
    logging::init_logger();
    leptos::mount::mount_to_body(App);
}

/// Browse state plus the actions that drive it.
#[derive(Clone, Copy)]
struct Catalog {
    state: RwSignal<BrowseState>,
    config: StoredValue<CatalogConfig>,
}

impl Catalog {
    fn new(config: CatalogConfig) -> Self {
        Self {
            state: RwSignal::new(BrowseState::new(&config)),
            config: StoredValue::new(config),
        }
    }

    fn load_more(self) {
        let Some(offset) = self.state.write().begin_page() else {
            tracing::debug!("ignoring load, a fetch is in progress");
            return;
        };
        self.spawn_page(offset);
    }

    fn search(self, name: String) {
        if !self.state.write().begin_search() {
            tracing::debug!("ignoring search, a fetch is in progress");
            return;
        }

        spawn_local(async move {
            let config = self.config.get_value();
            match catalog::resolve_by_name(&GlooFetch, &config, &name).await {
                Resolution::Matches(matches) => {
                    tracing::info!(query = %name, found = matches.len(), "search finished");
                    self.state.write().finish_search(matches);
                }
                Resolution::Browse => {
                    let offset = self.state.write().browse_instead();
                    self.finish_page(offset).await;
                }
            }
        });
    }

    fn spawn_page(self, offset: usize) {
        spawn_local(self.finish_page(offset));
    }

    async fn finish_page(self, offset: usize) {
        let config = self.config.get_value();
        let page = catalog::fetch_page(&GlooFetch, &config, offset).await;
        self.state.write().finish_page(page);
    }
}

#[component]
fn App() -> impl IntoView {
    let catalog = Catalog::new(CatalogConfig::default());
    provide_context(catalog);

    Effect::new(move |_| catalog.load_more());

    view! {
        <header class="navbar bg-sky-200 text-sky-900 fixed top-0 left-0 w-full z-10">
            <h1 class="w-full text-center font-extrabold text-3xl">"Poke The Mon"</h1>
        </header>
        <main class="container mx-auto p-4 mt-16 min-h-screen">
            <SearchForm />
            <LoadError />
            <CreatureList />
            <LoadMore />
        </main>
    }
}

#[component]
fn SearchForm() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let (search, set_search) = signal(String::new());

    let submit = move |e: web_sys::SubmitEvent| {
        e.prevent_default();
        catalog.search(search.get_untracked());
    };

    view! {
        <form on:submit=submit class="grid grid-cols-1 gap-2 pb-6">
            <label for="site-search" class="text-slate-700">
                "Enter the pokemon name here:"
            </label>
            <div class="join w-full">
                <input
                    type="search"
                    id="site-search"
                    name="q"
                    placeholder="Pikachu"
                    class="input input-bordered join-item w-4/5"
                    bind:value=(search, set_search)
                />
                <button type="submit" class="btn btn-primary join-item w-1/5">
                    "Search"
                </button>
            </div>
        </form>
    }
}

#[component]
fn LoadError() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let message = move || catalog.state.with(|s| s.last_error().map(str::to_owned));

    move || {
        message().map(|message| {
            view! {
                <div role="alert" class="alert alert-error mb-4">
                    <span>{message}</span>
                    <button
                        type="button"
                        class="btn btn-sm"
                        on:click=move |_| catalog.state.write().dismiss_error()
                    >
                        "dismiss"
                    </button>
                </div>
            }
        })
    }
}

#[component]
fn CreatureList() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let records = move || {
        catalog
            .state
            .with(|s| s.records().iter().cloned().enumerate().collect::<Vec<_>>())
    };

    view! {
        <ul class="grid grid-cols-1 md:grid-cols-4 gap-4 p-4 bg-base-100 rounded-lg shadow">
            <For
                each=records
                key=|(idx, record)| (*idx, record.name.clone())
                children=move |(_, record)| view! { <CreatureCard record /> }
            />
        </ul>
    }
}

#[component]
fn CreatureCard(record: CreatureRecord) -> impl IntoView {
    let CreatureRecord {
        name,
        image,
        description,
    } = record;

    view! {
        <li class="card border-2 border-pink-200 shadow">
            <figure class="h-64 bg-slate-50">
                <img src=image alt=name.clone() class="w-full h-full object-contain" />
            </figure>
            <div class="card-body p-2">
                <h2 class="card-title capitalize">{name}</h2>
                <p class="text-sm text-slate-500">{description}</p>
            </div>
        </li>
    }
}

#[component]
fn LoadMore() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let loading = move || catalog.state.with(BrowseState::is_loading);

    view! {
        <div class="p-6">
            <button
                type="button"
                class="btn btn-primary btn-block text-xl"
                on:click=move |_| catalog.load_more()
                disabled=loading
            >
                {move || if loading() { "Loading..." } else { "Load more" }}
            </button>
        </div>
    }
}
