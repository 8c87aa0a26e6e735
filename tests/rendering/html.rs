#[cfg(test)]
mod html {
    use formwork::rendering::{render, Html};

    use crate::{bundle, AGREEMENT};

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("{:?} not found in:\n{}", needle, haystack))
    }

    #[test]
    fn contents_come_before_body() {
        let bundle = bundle(AGREEMENT);
        let address = bundle.address();
        let composed = bundle
            .compose(&address)
            .unwrap();
        let html = render(&Html::default(), &composed);

        assert!(html.starts_with("<nav class=contents>\n<h2>Table of Contents</h2>\n<ol>\n"));
        assert!(position(&html, "</nav>") < position(&html, "<article class=form>"));
        assert!(html.ends_with("</article>\n"));
        assert!(html.contains("<li><span class=untitled>(No Heading)</span><ol>\n<li><a href=\"#heading:Survival\">Survival</a></li>\n</ol>\n</li>\n"));
    }

    #[test]
    fn section_order() {
        let bundle = bundle(AGREEMENT);
        let address = bundle.address();
        let composed = bundle
            .compose(&address)
            .unwrap();
        let html = render(&Html { child_links: true }, &composed);

        let section = position(&html, "<section class=\"conspicuous component\">");
        let heading = position(&html, "<h1 class=heading id=\"heading:Warranty\">Warranty</h1>");
        let provenance = position(&html, "<p class=provenance><a href=\"/acme\">acme</a> <a href=\"/acme/warranty\">warranty</a> <a href=\"/acme/warranty/3e\">3e</a> <span class=upgrade>(upgraded from <a href=\"/acme/warranty/2e\">2e</a>)</span></p>");
        let link = position(&html, &format!("href=\"/forms/{}\"", address.content[6].digest));
        let annotation = position(&html, "<aside class=\"annotation error\"><p>Disclaimers must be conspicuous.</p></aside>");
        let paragraph = position(&html, "<p>No warranty &amp; no &lt;liability&gt;.</p>");

        assert!(section < heading);
        assert!(heading < provenance);
        assert!(provenance < link);
        assert!(link < annotation);
        assert!(annotation < paragraph);
    }

    #[test]
    fn inline_markup() {
        let bundle = bundle(AGREEMENT);
        let address = bundle.address();
        let composed = bundle
            .compose(&address)
            .unwrap();
        let html = render(&Html::default(), &composed);

        assert!(html.contains("<p>Between <input type=text class=blank data-path=\"[&quot;content&quot;,1]\" value=\"Acme Corp\" disabled> and the <span class=use>Customer</span>.</p>"));
        assert!(html.contains("<dfn id=\"definition:customer:5\">Customer</dfn> means the buyer."));
        assert!(html.contains("See <a class=reference href=\"#heading:Warranty\">Warranty</a>."));
        assert!(!html.contains("child-link"));
    }

    #[test]
    fn repeated_definitions_share_one_id() {
        let bundle = bundle(
            r#"{"resolved": {"content": [
                {"definition": "Party"},
                " and ",
                {"definition": "party"},
                " ",
                {"use": "PARTY"}
            ]}}"#,
        );
        let address = bundle.address();
        let composed = bundle
            .compose(&address)
            .unwrap();
        let html = render(&Html::default(), &composed);

        assert_eq!(
            html.matches("id=\"definition:party\"")
                .count(),
            1
        );
        assert!(html.contains("<dfn>party</dfn>"));
        assert!(html.contains("<a class=use href=\"#definition:party\">PARTY</a>"));
    }
}
