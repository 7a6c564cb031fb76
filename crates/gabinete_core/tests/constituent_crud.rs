use gabinete_core::db::open_db_in_memory;
use gabinete_core::{Constituent, ConstituentRepository, SqliteConstituentRepository};

fn sample() -> Constituent {
    Constituent {
        cpf: "12345678900".to_string(),
        name: "Maria da Silva".to_string(),
        address: Some("Rua das Flores, 10".to_string()),
        neighborhood: "Centro".to_string(),
        phone: "11 99999-0001".to_string(),
        document_number: Some("MG-12.345.678".to_string()),
        voter_title: Some("0012 3456 7890".to_string()),
        voter_zone: Some("012".to_string()),
        voter_section: Some("0345".to_string()),
    }
}

#[test]
fn register_and_find_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteConstituentRepository::new(&conn);

    let constituent = sample();
    repo.register(&constituent).unwrap();

    let loaded = repo.find_by_cpf("12345678900").unwrap().unwrap();
    assert_eq!(loaded, constituent);
}

#[test]
fn registering_an_existing_cpf_is_a_silent_no_op() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteConstituentRepository::new(&conn);

    let original = sample();
    repo.register(&original).unwrap();

    let mut re_entry = sample();
    re_entry.name = "Maria S.".to_string();
    re_entry.phone = "11 98888-0002".to_string();
    repo.register(&re_entry).unwrap();

    let stored = repo.find_by_cpf(&original.cpf).unwrap().unwrap();
    assert_eq!(stored, original, "register must never overwrite");
}

#[test]
fn update_overwrites_all_mutable_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteConstituentRepository::new(&conn);

    repo.register(&sample()).unwrap();

    let mut updated = sample();
    updated.name = "Maria da Silva Santos".to_string();
    updated.address = None;
    updated.neighborhood = "Vila Nova".to_string();
    updated.phone = "11 97777-0003".to_string();
    updated.voter_zone = None;
    repo.update(&updated).unwrap();

    let stored = repo.find_by_cpf(&updated.cpf).unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[test]
fn update_of_unknown_cpf_is_silent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteConstituentRepository::new(&conn);

    let ghost = sample();
    repo.update(&ghost).unwrap();
    assert!(repo.find_by_cpf(&ghost.cpf).unwrap().is_none());
}

#[test]
fn search_matches_substring_of_name_or_cpf() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteConstituentRepository::new(&conn);

    repo.register(&sample()).unwrap();
    repo.register(&Constituent::new("98765432100", "João Pereira", "11 5555-0000"))
        .unwrap();

    let by_name = repo.search("Silva").unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].cpf, "12345678900");

    let by_cpf_fragment = repo.search("98765").unwrap();
    assert_eq!(by_cpf_fragment.len(), 1);
    assert_eq!(by_cpf_fragment[0].name, "João Pereira");

    assert!(repo.search("inexistente").unwrap().is_empty());
}

#[test]
fn list_all_returns_registry_ordered_by_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteConstituentRepository::new(&conn);

    repo.register(&Constituent::new("300", "Carlos", "tel-3")).unwrap();
    repo.register(&Constituent::new("100", "Ana", "tel-1")).unwrap();
    repo.register(&Constituent::new("200", "Bruno", "tel-2")).unwrap();

    let all = repo.list_all().unwrap();
    let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Ana", "Bruno", "Carlos"]);
}

#[test]
fn new_defaults_neighborhood_to_placeholder() {
    let constituent = Constituent::new("1", "Ana", "tel");
    assert_eq!(constituent.neighborhood, gabinete_core::NEIGHBORHOOD_UNKNOWN);
}
