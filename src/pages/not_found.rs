use leptos::prelude::*;

/// 404 - Not Found
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="maintenance-content">
			<h1 class="text-hero">"Página no encontrada"</h1>
		</div>
	}
}
