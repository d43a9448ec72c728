use axum::{extract::State, http::HeaderMap, Form};
use maud::{html, Markup, Render};

use crate::{
    bill::{self, PaymentMethod},
    components,
    form::BillForm,
    overlay::Overlay,
    AppState,
};

const PAYMENT_OPTIONS: [(&str, &str); 3] = [
    ("pix", "PIX"),
    ("dinheiro", "Dinheiro"),
    ("cartao", "Cartão"),
];

/// Everything the page shows: the echoed form and the overlay state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    pub form: BillForm,
    pub overlay: Overlay,
}

impl PageState {
    pub fn submit(form: BillForm) -> Self {
        let result = form.parse().and_then(|request| {
            tracing::debug!(?request, "calculating bill");
            bill::calculate_bill(&request)
        });

        match &result {
            Ok(split) => tracing::info!(
                discounted_total = %split.discounted_total,
                per_person = %split.per_person,
                "bill split"
            ),
            Err(err) => tracing::warn!(?form, %err, "rejected bill form"),
        }

        Self {
            overlay: Overlay::show(&result),
            form,
        }
    }

    pub fn close(self) -> Self {
        Self {
            overlay: self.overlay.close(),
            ..self
        }
    }

    pub fn is_dimmed(&self) -> bool {
        self.overlay.is_shown()
    }
}

impl Render for PageState {
    fn render(&self) -> Markup {
        let method = PaymentMethod::from(self.form.metodo_pagamento.as_str());

        html! {
            #"app" {
                main #"containerPrincipal" ."my-2"."lg:mx-4".escurecido[self.is_dimmed()] {
                    form #"formulario" ."formulario" method="post" action="/calcular"
                        hx-post="/calcular" hx-target="#app" hx-swap="outerHTML" {
                        (components::text_field("Número de pessoas", "num_pessoas", &self.form.num_pessoas, "numeric"))
                        (components::text_field("Valor total da conta (R$)", "valor_conta", &self.form.valor_conta, "decimal"))
                        ."form-control" {
                            label ."label" for="metodo_pagamento" {
                                span ."label-text" {"Forma de pagamento"}
                            }
                            select #"metodo_pagamento" name="metodo_pagamento" ."select"."select-primary" {
                                @for (value, label) in PAYMENT_OPTIONS {
                                    option value=(value) selected[method.as_str() == value] {(label)}
                                }
                            }
                        }
                        ."form-control"."mt-3" {
                            button type="submit" ."btn"."btn-outline"."btn-primary" {"Calcular"}
                        }
                    }
                }
                (self.overlay)
            }
        }
    }
}

fn respond(state: &AppState, headers: &HeaderMap, page: PageState) -> Markup {
    if headers.contains_key("hx-request") {
        page.render()
    } else {
        components::layout(&state.config.page_title, page.render())
    }
}

pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Markup {
    respond(&state, &headers, PageState::default())
}

pub async fn calculate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<BillForm>,
) -> Markup {
    respond(&state, &headers, PageState::submit(form))
}

pub async fn close(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<BillForm>,
) -> Markup {
    let page = PageState {
        form,
        overlay: Overlay::Hidden,
    };
    respond(&state, &headers, page.close())
}
