use maud::{html, Markup, Render};

use crate::{
    bill::{BillResult, BillSplit},
    icons,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayContent {
    Error(String),
    Split(BillSplit),
}

/// Result dialog. Every submit opens it, the close action hides it again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    Hidden,
    Shown(OverlayContent),
}

impl Overlay {
    pub fn show(result: &BillResult) -> Self {
        Self::Shown(match result {
            Ok(split) => OverlayContent::Split(*split),
            Err(err) => OverlayContent::Error(err.to_string()),
        })
    }

    pub fn close(self) -> Self {
        Self::Hidden
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Shown(_))
    }
}

pub fn total_line(split: &BillSplit) -> String {
    format!("Total com desconto: R$ {:.2}", split.discounted_total)
}

pub fn per_person_line(split: &BillSplit) -> String {
    format!("Valor por pessoa: R$ {:.2}", split.per_person)
}

impl Render for Overlay {
    fn render(&self) -> Markup {
        let content = match self {
            Self::Hidden => return html! { #"modalResultado" ."modal" hidden {} },
            Self::Shown(content) => content,
        };

        html! {
            #"modalResultado" ."modal"."modal-open" role="dialog" aria-modal="true" {
                ."modal-box" {
                    h2 ."font-bold"."text-lg" {"Resultado"}
                    @match content {
                        OverlayContent::Error(text) => {
                            #"mensagemErro" ."alert"."alert-error" role="alert" {
                                (icons::error()) span {(text)}
                            }
                            p #"resultadoTotal" {}
                            p #"resultadoPorPessoa" {}
                        }
                        OverlayContent::Split(split) => {
                            p #"resultadoTotal" {(total_line(split))}
                            p #"resultadoPorPessoa" {(per_person_line(split))}
                        }
                    }
                    ."modal-action" {
                        button #"fecharModal" type="submit" formaction="/fechar" formmethod="post" form="formulario"
                            hx-post="/fechar" hx-include="#formulario" hx-target="#app" hx-swap="outerHTML"
                            ."btn"."btn-primary" {"Concluir"}
                    }
                }
            }
        }
    }
}
