use leptos::prelude::*;
use log::info;
use web_sys::MouseEvent;

use crate::components::circuit_background::CircuitBackground;

/// Maintenance notice over the animated circuit background.
#[component]
pub fn Maintenance() -> impl IntoView {
	let on_access_panel = move |_: MouseEvent| {
		// Panel routing is not wired yet.
		info!("Accessing DOS Panel...");
	};

	view! {
		<div class="maintenance">
			<CircuitBackground />

			<div class="maintenance-content">
				<div class="glass">
					<div class="status">
						<div class="status-dot"></div>
						<span class="status-label">"Sistema en actualización"</span>
					</div>

					<h1 class="text-hero">"Estamos realizando mejoras"</h1>

					<p class="text-body">
						"Disculpa las molestias. Estamos trabajando para mejorar tu experiencia "
						"y volveremos en breve con nuevas funcionalidades."
					</p>

					<div class="actions">
						<button class="btn-primary" on:click=on_access_panel>
							<span>"Acceder a Panel DOS"</span>
							<svg class="btn-arrow" fill="none" viewBox="0 0 24 24" stroke="currentColor">
								<path
									stroke-linecap="round"
									stroke-linejoin="round"
									stroke-width="2"
									d="M13 7l5 5m0 0l-5 5m5-5H6"
								/>
							</svg>
						</button>
						<div>
							<button class="btn-ghost">"Notificarme cuando esté listo"</button>
						</div>
					</div>

					<div class="footer">
						<p>"Tiempo estimado: " <span class="footer-eta">"2-4 horas"</span></p>
					</div>
				</div>
			</div>

			<div class="grid-overlay"></div>
		</div>
	}
}
