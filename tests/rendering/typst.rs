#[cfg(test)]
mod typst {
    use formwork::rendering::{render, Typst};
    use formwork::settings::Scheme;
    use formwork::templating::{fill, Printable};

    use crate::{bundle, AGREEMENT};

    #[test]
    fn outline_numbering_by_depth() {
        let bundle = bundle(AGREEMENT);
        let address = bundle.address();
        let composed = bundle
            .compose(&address)
            .unwrap();
        let typst = render(&Typst::new(&bundle.settings), &composed);

        assert!(typst.starts_with("#heading(outlined: false, numbering: none)[Table of Contents]\n- Definitions\n"));
        assert!(typst.contains("#strong[1.] #emph[Definitions]. "));
        assert!(typst.contains("#set text(weight: \"bold\")\n#strong[2.] #emph[Warranty]. #footnote[acme warranty 3e, upgraded from 2e.] "));
        assert!(typst.contains("#strong[3.] "));
        assert!(typst.contains("#block(inset: (left: 1.5em))[\n#strong[(a)] #emph[Survival]. Survives.\n\n\n]\n"));
        assert!(typst.contains("Between #underline[Acme Corp] and the Customer."));
        assert!(typst.contains("See #emph[#emph[Warranty]]."));
    }

    #[test]
    fn decimal_numbering() {
        let mut bundle = bundle(AGREEMENT);
        bundle
            .settings
            .numbering = Scheme::Decimal;
        let address = bundle.address();
        let composed = bundle
            .compose(&address)
            .unwrap();
        let typst = render(&Typst::new(&bundle.settings), &composed);

        assert!(typst.contains("#strong[3.1] #emph[Survival]. "));
    }

    #[test]
    fn schedules_and_exhibits() {
        let bundle = bundle(
            r#"{
                "resolved": {"content": [
                    {"heading": "Services", "form": {"content": ["Provided."]}},
                    "Schedules follow.",
                    {"heading": "Pricing", "form": {"content": [
                        {"heading": "Rates", "form": {"content": ["Hourly."]}}
                    ]}},
                    "Exhibits follow.",
                    {"heading": "Form of Order", "form": {"content": ["Order."]}}
                ]},
                "settings": {"numbering": "ase"}
            }"#,
        );
        let address = bundle.address();
        let composed = bundle
            .compose(&address)
            .unwrap();
        let typst = render(&Typst::new(&bundle.settings), &composed);

        assert!(typst.contains("#strong[1.] #emph[Services]. "));
        assert!(typst.contains("#strong[Schedule 1] #emph[Pricing]. "));
        assert!(typst.contains("#block(inset: (left: 1.5em))[\n#strong[1.] #emph[Rates]. "));
        assert!(typst.contains("#strong[Exhibit A] #emph[Form of Order]. "));
    }

    #[test]
    fn printable_document() {
        let bundle = bundle(AGREEMENT);
        let address = bundle.address();
        let composed = bundle
            .compose(&address)
            .unwrap();
        let document = fill(&Printable, &bundle, &address, &composed).unwrap();

        assert!(document.starts_with("#set page(paper: \"us-letter\""));
        assert!(document.contains("#set par(justify: false)"));
        assert!(!document.contains("#align("));
        assert!(document.contains("#heading(outlined: false, numbering: none)[Table of Contents]"));
    }
}
