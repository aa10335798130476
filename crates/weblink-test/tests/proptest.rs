use proptest::prelude::*;
use weblink_test::{AnyLink, MailLink, TelLink, WebLink};

fn arbitrary_address() -> impl Strategy<Value = String> {
    "[a-z0-9._-]{1,12}@[a-z]{1,10}\\.[a-z]{2,5}"
}

/// Distinct, already-normalised recipients.
fn arbitrary_recipients(min: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(arbitrary_address(), min..5)
        .prop_map(|set| set.into_iter().collect())
}

fn arbitrary_mail_link() -> impl Strategy<Value = MailLink> {
    (
        arbitrary_recipients(0),
        prop::option::of(arbitrary_recipients(1)),
        prop::option::of(arbitrary_recipients(1)),
        prop::option::of("\\PC{1,40}"),
        prop::option::of("\\PC{1,80}"),
    )
        .prop_map(|(to, cc, bcc, subject, body)| MailLink {
            to: Some(to),
            cc,
            bcc,
            subject,
            body,
        })
}

fn arbitrary_tel_link() -> impl Strategy<Value = TelLink> {
    ("\\+?[0-9]{0,15}", "[0-9]{0,6}").prop_map(|(number, extension)| TelLink {
        number: Some(number),
        extension: Some(extension),
    })
}

proptest! {
    #[test]
    fn test_mail_generate_parse_roundtrip(link in arbitrary_mail_link()) {
        let generated = link.generate_link(true);
        let parsed = MailLink::from_link(&generated).unwrap();

        prop_assert_eq!(parsed.to, link.to);
        prop_assert_eq!(parsed.cc, link.cc);
        prop_assert_eq!(parsed.bcc, link.bcc);
        prop_assert_eq!(parsed.subject, link.subject);
        prop_assert_eq!(parsed.body, link.body);
    }

    #[test]
    fn test_mail_link_has_no_trailing_delimiter(link in arbitrary_mail_link()) {
        let generated = link.get_link();
        prop_assert!(generated.starts_with("mailto:"));
        prop_assert!(!generated.ends_with('?'));
        prop_assert!(!generated.ends_with('&'));
    }

    #[test]
    fn test_tel_generate_parse_roundtrip(link in arbitrary_tel_link()) {
        let parsed = TelLink::from_link(&link.generate_link(true)).unwrap();
        prop_assert_eq!(parsed, link);
    }

    #[test]
    fn test_any_link_display_parse_roundtrip(
        link in prop_oneof![
            arbitrary_mail_link().prop_map(AnyLink::Mail),
            arbitrary_tel_link().prop_map(AnyLink::Tel),
        ]
    ) {
        let parsed: AnyLink = link.to_string().parse().unwrap();
        prop_assert_eq!(parsed, link);
    }

    #[test]
    fn test_tel_fields_hold_only_digits(raw in "tel:\\PC{0,30}") {
        let link = TelLink::from_link(&raw).unwrap();
        let number = link.number.unwrap_or_default();
        let extension = link.extension.unwrap_or_default();

        prop_assert!(number.trim_start_matches('+').chars().all(|c| c.is_ascii_digit()));
        prop_assert!(number.matches('+').count() <= 1);
        prop_assert!(extension.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_prefix_probes_are_disjoint(raw in "(mailto:|tel:|MAILTO:|TeL:)?\\PC{0,20}") {
        prop_assert!(!(MailLink::can_handle(&raw) && TelLink::can_handle(&raw)));
        prop_assert_eq!(AnyLink::detect(&raw).is_some(), MailLink::can_handle(&raw) || TelLink::can_handle(&raw));
    }
}
