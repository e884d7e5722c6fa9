// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiny HTML report writer for the gallery demos.

#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: &'static str,
    pub(crate) description: String,
    pub(crate) svg: String,
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    out.push_str("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{title}</title>\n"));
    out.push_str(
        "<style>\nbody { font-family: system-ui, sans-serif; line-height: 1.8; margin: 2rem; }\n\
         section { margin-bottom: 2rem; }\n\
         .frames { display: flex; flex-wrap: wrap; gap: 16px; align-items: flex-start; }\n\
         svg { border: 1px solid #ddd; }\n</style>\n",
    );
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{title}</h1>\n"));
    for section in sections {
        out.push_str("<section>\n");
        out.push_str(&format!("<h2>{}</h2>\n", section.title));
        out.push_str(&format!("<p>{}</p>\n", section.description));
        out.push_str(&format!("<div class=\"frames\">{}</div>\n", section.svg));
        out.push_str("</section>\n");
    }
    out.push_str("</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_contains_every_section() {
        let sections = vec![
            HtmlSection {
                title: "One",
                description: String::from("first"),
                svg: String::from("<svg></svg>"),
            },
            HtmlSection {
                title: "Two",
                description: String::from("second"),
                svg: String::from("<svg></svg>"),
            },
        ];
        let html = render_report("Report", &sections);
        assert!(html.contains("<h1>Report</h1>"));
        assert!(html.contains("<h2>One</h2>"));
        assert!(html.contains("<h2>Two</h2>"));
    }
}
