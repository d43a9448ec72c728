use maud::PreEscaped;

type HTML = PreEscaped<&'static str>;

pub fn error() -> HTML {
    PreEscaped(
        r#"<svg class="h-6 w-6 shrink-0 stroke-current" fill="none" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                d="M10 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2m7-2a9 9 0 11-18 0 9 9 0 0118 0z" />
        </svg>"#,
    )
}

pub fn calculator() -> HTML {
    PreEscaped(
        r#"<svg class="h-6 w-6" fill="currentColor" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
            <path
                d="M7 2H17C18.1 2 19 2.9 19 4V20C19 21.1 18.1 22 17 22H7C5.9 22 5 21.1 5 20V4C5 2.9 5.9 2 7 2M7 4V8H17V4H7M7 10V12H9V10H7M11 10V12H13V10H11M15 10V12H17V10H15M7 14V16H9V14H7M11 14V16H13V14H11M15 14V20H17V14H15M7 18V20H9V18H7M11 18V20H13V18H11Z" />
        </svg>"#,
    )
}
