// Parser tests.

use super::*;

fn variables(pairs: &[(Variable, &[&str])]) -> HashMap<Variable, Vec<String>> {
    pairs
        .iter()
        .map(|(variable, values)| {
            (
                *variable,
                values.iter().map(|v| v.to_string()).collect::<Vec<_>>(),
            )
        })
        .collect()
}

#[test]
fn test_contact_variable() {
    let ads_txt = parse_str("CONTACT=foo").unwrap();
    assert_eq!(
        ads_txt.variables,
        variables(&[(Variable::Contact, &["foo"])])
    );
    assert!(ads_txt.records.is_empty());
}

#[test]
fn test_subdomain_variable() {
    let ads_txt = parse_str("SUBDOMAIN=foo").unwrap();
    assert_eq!(
        ads_txt.variables,
        variables(&[(Variable::Subdomain, &["foo"])])
    );
}

#[test]
fn test_inventory_partner_domain_variable() {
    let ads_txt = parse_str("INVENTORYPARTNERDOMAIN=foo").unwrap();
    assert_eq!(
        ads_txt.variables,
        variables(&[(Variable::InventoryPartnerDomain, &["foo"])])
    );
}

#[test]
fn test_case_insensitive_variable_keys() {
    for payload in ["contact=foo", "Contact=foo", "CONTACT=foo"] {
        let ads_txt = parse_str(payload).unwrap();
        assert_eq!(
            ads_txt.variables,
            variables(&[(Variable::Contact, &["foo"])]),
            "payload {:?}",
            payload
        );
    }
}

#[test]
fn test_unknown_variable_keys_are_skipped() {
    let ads_txt = parse_str("foo=bar").unwrap();
    assert!(ads_txt.variables.is_empty());
    assert!(ads_txt.records.is_empty());
}

#[test]
fn test_value_may_contain_equals() {
    let ads_txt = parse_str("Contact=a=b").unwrap();
    assert_eq!(
        ads_txt.variables,
        variables(&[(Variable::Contact, &["a=b"])])
    );
}

#[test]
fn test_repeated_variables_accumulate_in_order() {
    let ads_txt = parse_str("contact=foo\ncontact=bar").unwrap();
    assert_eq!(
        ads_txt.variables,
        variables(&[(Variable::Contact, &["foo", "bar"])])
    );
}

#[test]
fn test_full_line_comment() {
    let ads_txt = parse_str("#contact=foo\ncontact=bar").unwrap();
    assert_eq!(
        ads_txt.variables,
        variables(&[(Variable::Contact, &["bar"])])
    );
}

#[test]
fn test_partial_line_comment() {
    let ads_txt = parse_str("contact=foo\nsubdomain=bar#comment").unwrap();
    assert_eq!(
        ads_txt.variables,
        variables(&[
            (Variable::Contact, &["foo"]),
            (Variable::Subdomain, &["bar"])
        ])
    );
}

#[test]
fn test_whitespace_and_empty_lines_are_stripped() {
    let payload = "\ncontact=foo\n\n# another comment\nsubdomain=bar #comment";
    let ads_txt = parse_str(payload).unwrap();
    assert_eq!(
        ads_txt.variables,
        variables(&[
            (Variable::Contact, &["foo"]),
            (Variable::Subdomain, &["bar"])
        ])
    );
}

#[test]
fn test_embedded_whitespace_is_removed() {
    // Whitespace removal is aggressive: embedded spaces vanish, not just the
    // line ends.
    let ads_txt = parse_str("con tact = f o o").unwrap();
    assert_eq!(
        ads_txt.variables,
        variables(&[(Variable::Contact, &["foo"])])
    );
}

#[test]
fn test_direct_record() {
    let ads_txt = parse_str("foo,bar,DIRECT").unwrap();
    assert_eq!(
        ads_txt.records,
        vec![Record {
            ad_system_domain: "foo".to_string(),
            seller_account_id: "bar".to_string(),
            relationship: Relationship::Direct,
            cert_authority_id: String::new(),
            extension: None,
        }]
    );
}

#[test]
fn test_reseller_record() {
    let ads_txt = parse_str("foo,bar,RESELLER").unwrap();
    assert_eq!(ads_txt.records[0].relationship, Relationship::Reseller);
}

#[test]
fn test_relationship_token_is_case_insensitive() {
    let ads_txt = parse_str("foo,bar,direct").unwrap();
    assert_eq!(ads_txt.records[0].relationship, Relationship::Direct);
}

#[test]
fn test_percent_encoded_comma_does_not_split_fields() {
    let ads_txt = parse_str("foo,foo%2Cbar,DIRECT").unwrap();
    assert_eq!(ads_txt.records[0].seller_account_id, "foo,bar");
}

#[test]
fn test_plus_decodes_to_space() {
    let ads_txt = parse_str("foo,a+b,DIRECT").unwrap();
    assert_eq!(ads_txt.records[0].seller_account_id, "a b");
}

#[test]
fn test_unrecognized_relationship_aborts_parse() {
    // The valid first line must not leak into a partial result.
    let err = parse_str("ok.example,1,DIRECT\nfoo,bar,baz").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnrecognizedRelationship(token) if token == "baz"
    ));
}

#[test]
fn test_missing_ad_system_domain() {
    let err = parse_str(",foo,DIRECT").unwrap_err();
    assert!(matches!(err, ParseError::MissingAdSystemDomain));
}

#[test]
fn test_missing_seller_account_id() {
    let err = parse_str("foo,,DIRECT").unwrap_err();
    assert!(matches!(err, ParseError::MissingSellerAccountId));
}

#[test]
fn test_percent_decode_failure_names_the_field() {
    let err = parse_str("foo,ba%zz,DIRECT").unwrap_err();
    assert!(matches!(
        err,
        ParseError::PercentDecode {
            field: RecordField::SellerAccountId,
            ..
        }
    ));

    let err = parse_str("f%f,bar,DIRECT").unwrap_err();
    assert!(matches!(
        err,
        ParseError::PercentDecode {
            field: RecordField::AdSystemDomain,
            ..
        }
    ));

    let err = parse_str("foo,bar,DIRECT,b%").unwrap_err();
    assert!(matches!(
        err,
        ParseError::PercentDecode {
            field: RecordField::CertAuthorityId,
            ..
        }
    ));
}

#[test]
fn test_record_with_cert_authority_id() {
    let ads_txt = parse_str("foo,bar,RESELLER,baz").unwrap();
    assert_eq!(ads_txt.records[0].cert_authority_id, "baz");
}

#[test]
fn test_fields_past_the_fourth_are_ignored() {
    let ads_txt = parse_str("foo,bar,DIRECT,baz,extra,more").unwrap();
    assert_eq!(ads_txt.records.len(), 1);
    assert_eq!(ads_txt.records[0].cert_authority_id, "baz");
}

#[test]
fn test_extension_annotation_is_preserved() {
    let ads_txt = parse_str("foo,bar,DIRECT;note=hello").unwrap();
    assert_eq!(ads_txt.records[0].extension.as_deref(), Some("note=hello"));
}

#[test]
fn test_short_line_with_equals_is_still_a_variable() {
    // A line that fails record recognition structurally (fewer than three
    // comma fields) must still be attempted as a variable.
    let ads_txt = parse_str("contact=one,two").unwrap();
    assert_eq!(
        ads_txt.variables,
        variables(&[(Variable::Contact, &["one,two"])])
    );
    assert!(ads_txt.records.is_empty());
}

#[test]
fn test_placeholder_record_is_excluded_without_error() {
    let ads_txt =
        parse_str("placeholder.example.com, placeholder, DIRECT, placeholder").unwrap();
    assert!(ads_txt.records.is_empty());
}

#[test]
fn test_read_fault_aborts_parse() {
    struct FailingReader;

    impl std::io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("stream fault"))
        }
    }

    let err = parse(std::io::BufReader::new(FailingReader)).unwrap_err();
    assert!(matches!(err, ParseError::Read(_)));
}

#[test]
fn test_file_with_all_features() {
    let payload = "\n\
        # comment\n\
        foo,bar,DIRECT,baz\n\
        one,two,RESELLER\n\
        \n\
        # another comment\n\
        contact=foo\n\
        contact=foobar\n\
        subdomain=bar #comment";
    let ads_txt = parse_str(payload).unwrap();
    assert_eq!(
        ads_txt.records,
        vec![
            Record {
                ad_system_domain: "foo".to_string(),
                seller_account_id: "bar".to_string(),
                relationship: Relationship::Direct,
                cert_authority_id: "baz".to_string(),
                extension: None,
            },
            Record {
                ad_system_domain: "one".to_string(),
                seller_account_id: "two".to_string(),
                relationship: Relationship::Reseller,
                cert_authority_id: String::new(),
                extension: None,
            },
        ]
    );
    assert_eq!(
        ads_txt.variables,
        variables(&[
            (Variable::Contact, &["foo", "foobar"]),
            (Variable::Subdomain, &["bar"])
        ])
    );
}
