mod common;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use common::{filing, read_fixture};
use std::str::FromStr;
use xbrlkit::{
    ElementKind, FactKey, FactLookup, FactValue, Filing, FilingConfig, Measure, Period, Taxonomy,
    XbrlError,
};

const MINIMAL_FIXTURE: &str = "filings/minimal.xml";
const QUARTERLY_FIXTURE: &str = "filings/quarterly.xml";
const DANGLING_FIXTURE: &str = "filings/dangling.xml";
const MISSING_PERIOD_FIXTURE: &str = "filings/missing_period.xml";
const OUT_OF_ORDER_FIXTURE: &str = "filings/out_of_order.xml";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn minimal_fact_by_id() {
    let filing = filing(MINIMAL_FIXTURE);

    let assets = filing.fact_by_id(1).unwrap().unwrap();
    assert_eq!(assets.value, FactValue::Integer(1000));
    assert_eq!(assets.context.period, Period::Instant(date(2023, 1, 1)));

    let revenues = filing.fact_by_id(2).unwrap().unwrap();
    assert_eq!(revenues.value, FactValue::Integer(2000));
    assert_eq!(
        revenues.context.period,
        Period::Range {
            start: Some(date(2023, 1, 1)),
            end: Some(date(2023, 3, 31)),
        }
    );
}

#[test]
fn minimal_skipped_fact_is_invisible() {
    let filing = filing(MINIMAL_FIXTURE);

    assert!(filing.fact_by_id(3).unwrap().is_none());
    assert!(
        filing
            .fact_by_name("dei:EntityRegistrantName")
            .unwrap()
            .is_none()
    );
    let all = filing.filter_facts(|_| true).unwrap();
    assert!(all.iter().all(|f| f.tag != "EntityRegistrantName"));
}

#[test]
fn minimal_filter_by_taxonomy() {
    let filing = filing(MINIMAL_FIXTURE);

    let facts = filing.filter_facts(|f| f.taxonomy == "us-gaap").unwrap();
    let ids: Vec<u32> = facts.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn minimal_name_lookup_matches_id_lookup() {
    let filing = filing(MINIMAL_FIXTURE);

    let by_name = filing.fact_by_name("us-gaap:Assets").unwrap();
    let by_id = filing.fact_by_id(1).unwrap();
    assert!(by_name.is_some());
    assert_eq!(by_name, by_id);
    assert_eq!(
        filing.get_fact(FactKey::TaxonomyTag("us-gaap", "Assets")).unwrap(),
        by_id
    );
}

#[test]
fn minimal_unit_collection() {
    let filing = filing(MINIMAL_FIXTURE);

    assert_eq!(filing.units().len(), 1);
    assert_eq!(filing.units()[0].id, "unit-1");
    assert_eq!(filing.units()[0].measure, Measure::Simple("USD".to_string()));
}

#[test]
fn fact_context_matches_context_ref() {
    let filing = filing(QUARTERLY_FIXTURE);

    for fact in filing.filter_facts(|_| true).unwrap() {
        let context = filing.context(fact.context_ref).unwrap();
        assert_eq!(fact.context, context);
        assert_eq!(filing.fact_by_id(fact.id).unwrap().unwrap(), fact);
    }
}

#[test]
fn quarterly_accounts_receivable() {
    let filing = filing(QUARTERLY_FIXTURE);

    let fact = filing.fact_by_id(3).unwrap().unwrap();
    assert_eq!(fact.tag, "AccountsReceivableNetCurrent");
    assert_eq!(fact.taxonomy, "us-gaap");
    assert_eq!(fact.value, FactValue::Integer(28184000000));
    assert_eq!(fact.decimals, Some(-6));
    assert_eq!(filing.unit_for(&fact).unwrap().measure, Measure::Simple("iso4217:USD".to_string()));

    // First match in id order wins when a concept is reported for several periods.
    let by_name = filing
        .fact_by_tag(Taxonomy::UsGaap, "AccountsReceivableNetCurrent")
        .unwrap()
        .unwrap();
    assert_eq!(by_name.id, 3);
}

#[test]
fn quarterly_accounts_payable_found() {
    let filing = filing(QUARTERLY_FIXTURE);

    let fact = filing
        .fact_by_name("us-gaap:AccountsPayableCurrent")
        .unwrap()
        .unwrap();
    assert_eq!(fact.context.period, Period::Instant(date(2023, 7, 1)));
    assert!(filing.fact_by_name("test").unwrap().is_none());
}

#[test]
fn quarterly_period_elements() {
    let filing = filing(QUARTERLY_FIXTURE);

    let contexts: Vec<_> = filing.contexts().collect();
    assert_eq!(contexts.len(), 3);
    assert_eq!(contexts[0].entity_identifier, "0000320193");
    assert_eq!(
        contexts[0].period,
        Period::Range {
            start: Some(date(2022, 9, 25)),
            end: Some(date(2023, 7, 1)),
        }
    );
    assert_eq!(contexts[1].period, Period::Instant(date(2023, 7, 1)));
    assert_eq!(contexts[2].period, Period::Instant(date(2022, 9, 24)));
}

#[test]
fn quarterly_units() {
    let filing = filing(QUARTERLY_FIXTURE);

    let ids: Vec<&str> = filing.units().iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["usd", "shares", "usdPerShare"]);
    assert_eq!(
        filing.unit("usdPerShare").unwrap().measure,
        Measure::Ratio {
            numerator: "iso4217:USD".to_string(),
            denominator: "xbrli:shares".to_string(),
        }
    );
}

#[test]
fn quarterly_values() {
    let filing = filing(QUARTERLY_FIXTURE);

    let eps = filing
        .fact_by_name("us-gaap:EarningsPerShareBasic")
        .unwrap()
        .unwrap();
    assert_eq!(eps.value, FactValue::Decimal(BigDecimal::from_str("4.33").unwrap()));

    let doc_type = filing.fact_by_name("dei:DocumentType").unwrap().unwrap();
    assert_eq!(doc_type.value, FactValue::Text("10-Q".to_string()));

    let liabilities = filing.fact_by_name("us-gaap:Liabilities").unwrap().unwrap();
    assert_eq!(liabilities.value, FactValue::Text("-1,000".to_string()));

    let shares = filing
        .fact_by_name("dei:EntityCommonStockSharesOutstanding")
        .unwrap()
        .unwrap();
    assert_eq!(shares.decimals, None);
    assert_eq!(shares.value.as_i64(), Some(15634232000));
}

#[test]
fn quarterly_skips_incomplete_facts() {
    let filing = filing(QUARTERLY_FIXTURE);

    // fact-8 has no contextRef, fact-9 has no value
    assert!(filing.fact_by_id(8).unwrap().is_none());
    assert!(filing.fact_by_id(9).unwrap().is_none());
    assert!(filing.fact_by_name("us-gaap:NetIncomeLoss").unwrap().is_none());
    assert_eq!(filing.fact_count(), 8);
    assert_eq!(filing.filter_facts(|_| true).unwrap().len(), 8);
    assert!(filing.fact_by_id(10).unwrap().is_some());
}

#[test]
fn quarterly_concepts() {
    let filing = filing(QUARTERLY_FIXTURE);

    let concepts = filing.concepts();
    assert_eq!(concepts.len(), 7);
    assert_eq!(concepts[0], "dei:DocumentType");
    assert!(concepts.contains(&"us-gaap:AccountsReceivableNetCurrent".to_string()));
}

#[test]
fn dangling_context_ref_surfaces() {
    let filing = filing(DANGLING_FIXTURE);

    assert!(filing.fact_by_id(1).unwrap().is_some());
    assert!(matches!(
        filing.fact_by_id(2),
        Err(XbrlError::DanglingReference {
            fact_id: 2,
            context_ref: 9
        })
    ));
    assert!(matches!(
        filing.fact_by_name("us-gaap:Revenues"),
        Err(XbrlError::DanglingReference { .. })
    ));
    assert!(matches!(
        filing.filter_facts(|_| true),
        Err(XbrlError::DanglingReference { .. })
    ));
}

#[test]
fn missing_period_bounds_fail_construction() {
    let content = read_fixture(MISSING_PERIOD_FIXTURE);
    let result = Filing::from_document(&content);

    assert!(matches!(
        result,
        Err(XbrlError::Structural {
            kind: ElementKind::Context,
            ..
        })
    ));
}

#[test]
fn out_of_order_unit_fails_when_strict() {
    let content = read_fixture(OUT_OF_ORDER_FIXTURE);

    assert!(matches!(
        Filing::from_document(&content),
        Err(XbrlError::Structural {
            kind: ElementKind::Unit,
            ..
        })
    ));
}

#[test]
fn out_of_order_unit_ignored_when_lenient() {
    let content = read_fixture(OUT_OF_ORDER_FIXTURE);
    let filing = Filing::from_document_with_config(&content, FilingConfig::lenient()).unwrap();

    assert!(filing.units().is_empty());
    assert_eq!(filing.fact_count(), 2);
    assert_eq!(
        filing.fact_by_id(2).unwrap().unwrap().value,
        FactValue::Integer(2000)
    );
}

#[test]
fn malformed_document_is_an_xml_error() {
    let result = Filing::from_document("<xbrl><context id=\"context-1\"></xbrl>");
    assert!(matches!(result, Err(XbrlError::XmlError(_))));
}

#[test]
fn fact_serializes_with_context() {
    let filing = filing(MINIMAL_FIXTURE);
    let fact = filing.fact_by_id(1).unwrap().unwrap();

    let json = serde_json::to_value(fact).unwrap();
    assert_eq!(json["taxonomy"], "us-gaap");
    assert_eq!(json["tag"], "Assets");
    assert_eq!(json["value"], 1000);
    assert_eq!(json["contextRef"], 1);
    assert_eq!(json["context"]["entityIdentifier"], "0000320193");
    assert_eq!(json["context"]["period"]["instant"], "2023-01-01");
}

const ONE_CONTEXT: &str = r#"<context id="context-1">
    <entity><identifier>0000320193</identifier></entity>
    <period instant="2023-07-01"/>
  </context>"#;

#[test]
fn mixed_content_fact_keeps_inner_spacing() {
    let content = format!(
        "<xbrl>\n  {ONE_CONTEXT}\n  <dei:EntityRegistrantName id=\"fact-1\" contextRef=\"context-1\">Apple <b>Inc</b></dei:EntityRegistrantName>\n</xbrl>"
    );
    let filing = Filing::from_document(&content).unwrap();

    let name = filing.fact_by_id(1).unwrap().unwrap();
    assert_eq!(name.value, FactValue::Text("Apple Inc".to_string()));
}

#[test]
fn lenient_document_with_u32_scale_fact_id() {
    let content = format!(
        "<xbrl>\n  {ONE_CONTEXT}\n  <us-gaap:Assets id=\"fact-4000000000\" contextRef=\"context-1\">1000</us-gaap:Assets>\n</xbrl>"
    );
    let filing = Filing::from_document_with_config(&content, FilingConfig::lenient()).unwrap();

    assert_eq!(filing.fact_count(), 1);
    let assets = filing.fact_by_id(4_000_000_000).unwrap().unwrap();
    assert_eq!(assets.value, FactValue::Integer(1000));
    assert!(matches!(
        Filing::from_document(&content),
        Err(XbrlError::Structural {
            kind: ElementKind::Fact,
            ..
        })
    ));
}
