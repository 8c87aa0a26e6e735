#[cfg(test)]
mod text {
    use formwork::formatting::{flatten, Identity, Piece};
    use formwork::rendering::render;

    use crate::{bundle, AGREEMENT};

    #[test]
    fn plain_text_outline() {
        let bundle = bundle(AGREEMENT);
        let address = bundle.address();
        let composed = bundle
            .compose(&address)
            .unwrap();
        let text = render(&Identity, &composed);

        assert_eq!(
            text,
            r#"Table of Contents
- Definitions
- Warranty
- (No Heading)
  - Survival

Between Acme Corp and the Customer.
1 Definitions
  "Customer" means the buyer.
2 Warranty
[acme/warranty 3e, upgraded from 2e]
  [error] Disclaimers must be conspicuous.
  No warranty & no <liability>.
3
  See Warranty.
  3.1 Survival
    Survives.
"#
        );
    }

    #[test]
    fn pieces_start_with_contents() {
        let bundle = bundle(AGREEMENT);
        let address = bundle.address();
        let composed = bundle
            .compose(&address)
            .unwrap();
        let pieces = flatten(&composed);

        assert_eq!(pieces.first(), Some(&Piece::ContentsStart));
        assert_eq!(pieces.last(), Some(&Piece::BodyEnd));

        let body = pieces
            .iter()
            .position(|piece| *piece == Piece::BodyStart)
            .unwrap();
        let contents = pieces
            .iter()
            .position(|piece| *piece == Piece::ContentsEnd)
            .unwrap();
        assert!(contents < body);
    }
}
