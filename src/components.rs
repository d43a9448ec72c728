use maud::{html, Markup, DOCTYPE};

use crate::icons;

pub fn layout(title: &str, main_content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta http-equiv="X-UA-Compatible" content="ie=edge";
                title {(title)}
                link rel="stylesheet" href="/assets/styles.css";
            }
            body {
                header ."navbar"."bg-base-300" {
                    (icons::calculator())
                    span ."text-xl"."font-bold" {(title)}
                }
                (main_content)
                script src="https://unpkg.com/htmx.org@2.0.1" {}
            }
        }
    }
}

pub fn text_field(label: &str, name: &str, value: &str, input_mode: &str) -> Markup {
    html! {
        ."form-control" {
            label ."label" for=(name) {
                span ."label-text" {(label)}
            }
            input #(name) type="text" name=(name) value=(value) inputmode=(input_mode) required ."input"."input-bordered";
        }
    }
}
