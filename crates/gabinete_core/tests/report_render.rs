use gabinete_core::db::open_db_in_memory;
use gabinete_core::{
    Constituent, ConstituentRepository, NewServiceRequest, OfficeService, Priority, RequestRecord,
    RequestStatus, RequestType, ServiceError, SqliteConstituentRepository, SqliteRequestRepository,
    render_report,
};

fn record(id: i64) -> RequestRecord {
    RequestRecord {
        id,
        constituent_cpf: "12345678900".to_string(),
        constituent_name: "Maria da Silva".to_string(),
        constituent_phone: "11 99999-0001".to_string(),
        request_type: RequestType::NeighborhoodImprovement,
        description: Some("Recapeamento da rua".to_string()),
        attachments: String::new(),
        created_at: "2024-05-01 09:00:00".to_string(),
        deadline: None,
        handler: None,
        priority: Priority::Normal,
        status: RequestStatus::Pending,
    }
}

#[test]
fn empty_record_set_yields_a_one_page_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vazio.pdf");

    let outcome = render_report(&[], &path).unwrap();
    assert_eq!(outcome.pages, 1);
    assert_eq!(outcome.rendered, 0);
    assert_eq!(outcome.skipped, 0);
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn ten_records_break_onto_exactly_two_pages() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dez.pdf");

    let records: Vec<RequestRecord> = (1..=10).map(record).collect();
    let outcome = render_report(&records, &path).unwrap();
    assert_eq!(outcome.pages, 2);
    assert_eq!(outcome.rendered, 10);
    assert_eq!(outcome.skipped, 0);
}

#[test]
fn five_records_fit_on_one_page() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cinco.pdf");

    let records: Vec<RequestRecord> = (1..=5).map(record).collect();
    let outcome = render_report(&records, &path).unwrap();
    assert_eq!(outcome.pages, 1);
    assert_eq!(outcome.rendered, 5);
}

#[test]
fn malformed_record_is_skipped_without_aborting() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("parcial.pdf");

    let mut broken = record(2);
    broken.constituent_name = "   ".to_string();
    let records = vec![record(1), broken, record(3)];

    let outcome = render_report(&records, &path).unwrap();
    assert_eq!(outcome.rendered, 2);
    assert_eq!(outcome.skipped, 1);
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn selector_report_with_no_matches_writes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let service = OfficeService::new(
        SqliteConstituentRepository::new(&conn),
        SqliteRequestRepository::new(&conn),
    );

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nada.pdf");

    let err = service
        .report_by_constituent("00000000000", Some(&path))
        .unwrap_err();
    assert!(matches!(err, ServiceError::NoRecords));
    assert!(!path.exists(), "empty selection must not produce a file");
}

#[test]
fn selector_reports_render_matching_requests() {
    let conn = open_db_in_memory().unwrap();
    let constituents = SqliteConstituentRepository::new(&conn);
    let mut maria = Constituent::new("111", "Maria da Silva", "tel-1");
    maria.neighborhood = "Centro".to_string();
    constituents.register(&maria).unwrap();

    let service = OfficeService::new(
        SqliteConstituentRepository::new(&conn),
        SqliteRequestRepository::new(&conn),
    );
    service
        .register_request(&NewServiceRequest::new("111", RequestType::HealthSupport))
        .unwrap();

    let dir = tempfile::tempdir().unwrap();

    let by_cpf = service
        .report_by_constituent("111", Some(&dir.path().join("cpf.pdf")))
        .unwrap();
    assert_eq!(by_cpf.rendered, 1);

    let by_type = service
        .report_by_type(RequestType::HealthSupport, Some(&dir.path().join("tipo.pdf")))
        .unwrap();
    assert_eq!(by_type.rendered, 1);

    let by_neighborhood = service
        .report_by_neighborhood("Centro", Some(&dir.path().join("bairro.pdf")))
        .unwrap();
    assert_eq!(by_neighborhood.rendered, 1);

    let err = service
        .report_by_type(RequestType::Appreciation, Some(&dir.path().join("x.pdf")))
        .unwrap_err();
    assert!(matches!(err, ServiceError::NoRecords));
}

#[test]
fn report_all_renders_even_an_empty_history() {
    let conn = open_db_in_memory().unwrap();
    let service = OfficeService::new(
        SqliteConstituentRepository::new(&conn),
        SqliteRequestRepository::new(&conn),
    );

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("historico.pdf");
    let outcome = service.report_all(Some(&path)).unwrap();
    assert_eq!(outcome.pages, 1);
    assert_eq!(outcome.rendered, 0);
    assert!(path.exists());
}
