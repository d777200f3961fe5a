use rfinanzas::core::{CategoryLogic, SummaryLogic, TransactionLogic};
use rfinanzas::db::Store;
use rfinanzas::db::initialize::init_db;
use rfinanzas::db::log::load_log;
use rfinanzas::errors::AppError;
use rfinanzas::models::{Kind, KindFilter, NewTransaction};
use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;

fn fresh_store() -> Store {
    let store = Store::open_in_memory().expect("open in-memory store");
    init_db(&store).expect("init store");
    store
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).expect("valid decimal")
}

fn tx_count(store: &Store) -> usize {
    TransactionLogic::list(store, KindFilter::All)
        .expect("list")
        .len()
}

#[test]
fn test_initialize_seeds_default_categories_in_order() {
    let store = fresh_store();

    let names: Vec<String> = CategoryLogic::list(&store)
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();

    assert_eq!(
        names,
        vec![
            "Alimentos",
            "Entretenimiento",
            "Transporte",
            "Vivienda",
            "Freelance",
            "Inversiones",
            "Salario",
        ]
    );
}

#[test]
fn test_initialize_is_idempotent() {
    let store = fresh_store();

    let report = init_db(&store).expect("second init");
    assert!(report.migrations.is_empty());
    assert_eq!(report.seeded, 0);
    assert_eq!(CategoryLogic::list(&store).unwrap().len(), 7);
}

#[test]
fn test_deleted_default_category_is_seeded_again() {
    let mut store = fresh_store();
    let transporte = CategoryLogic::find(&store, "Transporte").unwrap().unwrap();

    CategoryLogic::delete(&mut store, transporte.id).expect("delete unused default");
    assert!(CategoryLogic::find(&store, "Transporte").unwrap().is_none());

    let report = init_db(&store).unwrap();
    assert_eq!(report.seeded, 1);
    assert!(CategoryLogic::find(&store, "Transporte").unwrap().is_some());
}

#[test]
fn test_add_then_list_returns_identical_fields() {
    let mut store = fresh_store();

    let id = TransactionLogic::add(
        &mut store,
        Kind::Expense,
        "Transporte",
        "12.30",
        "2024-02-03",
        Some("bus pass"),
    )
    .expect("add");

    let all = TransactionLogic::list(&store, KindFilter::All).unwrap();
    assert_eq!(all.len(), 1);

    let tx = &all[0];
    assert_eq!(tx.id, id);
    assert_eq!(tx.kind, Kind::Expense);
    assert_eq!(tx.category, "Transporte");
    assert_eq!(tx.amount, dec("12.30"));
    assert_eq!(tx.date_str(), "2024-02-03");
    assert_eq!(tx.description.as_deref(), Some("bus pass"));
}

#[test]
fn test_blank_description_is_stored_as_none() {
    let mut store = fresh_store();

    let id = TransactionLogic::add(&mut store, Kind::Income, "Salario", "10", "2024-01-01", Some("   "))
        .unwrap();

    assert_eq!(TransactionLogic::get(&store, id).unwrap().description, None);
}

#[test]
fn test_non_positive_or_garbage_amount_is_rejected() {
    let mut store = fresh_store();

    for amount in ["0", "-5", "0.00", "abc", ""] {
        let res = TransactionLogic::add(
            &mut store,
            Kind::Expense,
            "Alimentos",
            amount,
            "2024-01-15",
            None,
        );
        assert!(
            matches!(res, Err(AppError::Validation(_))),
            "amount {:?} should be rejected",
            amount
        );
    }

    assert_eq!(tx_count(&store), 0, "no row may be persisted");
}

#[test]
fn test_totals_out_of_range_fail_without_panicking() {
    let mut store = fresh_store();
    let largest = Decimal::MAX.to_string();

    let first = TransactionLogic::add(&mut store, Kind::Expense, "Alimentos", &largest, "2024-01-15", None)
        .expect("largest representable amount is valid");
    TransactionLogic::add(&mut store, Kind::Expense, "Alimentos", &largest, "2024-01-16", None)
        .expect("largest representable amount is valid");

    assert!(matches!(
        SummaryLogic::total_by_kind(&store, Kind::Expense),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(SummaryLogic::balance(&store), Err(AppError::Validation(_))));
    assert!(matches!(
        SummaryLogic::expense_totals_by_category(&store),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(SummaryLogic::summary(&store), Err(AppError::Validation(_))));

    // the other kind is unaffected
    assert_eq!(SummaryLogic::total_by_kind(&store, Kind::Income).unwrap(), Decimal::ZERO);

    TransactionLogic::delete(&mut store, &[first]).unwrap();
    assert_eq!(SummaryLogic::total_by_kind(&store, Kind::Expense).unwrap(), Decimal::MAX);
    assert_eq!(SummaryLogic::balance(&store).unwrap(), -Decimal::MAX);
}

#[test]
fn test_invalid_date_is_rejected() {
    let mut store = fresh_store();

    for date in ["15/01/2024", "2024-13-01", "2024-02-30", "yesterday", ""] {
        let res = TransactionLogic::add(&mut store, Kind::Expense, "Alimentos", "5", date, None);
        assert!(
            matches!(res, Err(AppError::Validation(_))),
            "date {:?} should be rejected",
            date
        );
    }

    assert_eq!(tx_count(&store), 0);
}

#[test]
fn test_empty_category_is_rejected() {
    let mut store = fresh_store();

    let res = TransactionLogic::add(&mut store, Kind::Expense, "   ", "5", "2024-01-15", None);
    assert!(matches!(res, Err(AppError::Validation(_))));
    assert_eq!(tx_count(&store), 0);
}

#[test]
fn test_list_orders_by_date_desc_then_insertion() {
    let mut store = fresh_store();

    let a = TransactionLogic::add(&mut store, Kind::Expense, "Alimentos", "1", "2024-01-10", None).unwrap();
    let b = TransactionLogic::add(&mut store, Kind::Income, "Salario", "2", "2024-03-01", None).unwrap();
    let c = TransactionLogic::add(&mut store, Kind::Expense, "Vivienda", "3", "2024-01-10", None).unwrap();
    let d = TransactionLogic::add(&mut store, Kind::Expense, "Transporte", "4", "2023-12-31", None).unwrap();

    let ids: Vec<i64> = TransactionLogic::list(&store, KindFilter::All)
        .unwrap()
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![b, a, c, d]);

    let expenses: Vec<i64> = TransactionLogic::list(&store, KindFilter::Expense)
        .unwrap()
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(expenses, vec![a, c, d]);

    let incomes = TransactionLogic::list(&store, KindFilter::Income).unwrap();
    assert_eq!(incomes.len(), 1);
    assert_eq!(incomes[0].id, b);
}

#[test]
fn test_delete_skips_missing_ids() {
    let mut store = fresh_store();

    let id1 = TransactionLogic::add(&mut store, Kind::Expense, "Alimentos", "5", "2024-01-15", None).unwrap();
    let id2 = TransactionLogic::add(&mut store, Kind::Expense, "Alimentos", "6", "2024-01-16", None).unwrap();

    let deleted = TransactionLogic::delete(&mut store, &[id1, 9999]).unwrap();
    assert_eq!(deleted, 1);

    let remaining = TransactionLogic::list(&store, KindFilter::All).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, id2);
}

#[test]
fn test_delete_logs_only_removed_ids() {
    let mut store = fresh_store();

    let id = TransactionLogic::add(&mut store, Kind::Expense, "Alimentos", "5", "2024-01-15", None).unwrap();
    TransactionLogic::delete(&mut store, &[9999, id, 4242]).unwrap();

    let del_rows: Vec<_> = load_log(&store.conn)
        .unwrap()
        .into_iter()
        .filter(|e| e.operation == "del")
        .collect();
    assert_eq!(del_rows.len(), 1);
    assert_eq!(del_rows[0].target, format!("#{id}"));

    // nothing removed, nothing logged
    TransactionLogic::delete(&mut store, &[9999]).unwrap();
    let del_count = load_log(&store.conn)
        .unwrap()
        .iter()
        .filter(|e| e.operation == "del")
        .count();
    assert_eq!(del_count, 1);
}

#[test]
fn test_delete_counts_duplicate_ids_once() {
    let mut store = fresh_store();

    let id = TransactionLogic::add(&mut store, Kind::Expense, "Alimentos", "5", "2024-01-15", None).unwrap();

    assert_eq!(TransactionLogic::delete(&mut store, &[id, id]).unwrap(), 1);
    assert_eq!(TransactionLogic::delete(&mut store, &[id]).unwrap(), 0);
}

#[test]
fn test_update_replaces_fields() {
    let mut store = fresh_store();

    let id = TransactionLogic::add(&mut store, Kind::Expense, "Alimentos", "5", "2024-01-15", None).unwrap();

    let changed =
        NewTransaction::parse(Kind::Income, "Freelance", "300.75", "2024-02-01", Some("logo")).unwrap();
    TransactionLogic::update(&mut store, id, &changed).expect("update");

    let tx = TransactionLogic::get(&store, id).unwrap();
    assert_eq!(tx.kind, Kind::Income);
    assert_eq!(tx.category, "Freelance");
    assert_eq!(tx.amount, dec("300.75"));
    assert_eq!(tx.date_str(), "2024-02-01");
    assert_eq!(tx.description.as_deref(), Some("logo"));
}

#[test]
fn test_update_and_get_missing_transaction_fail_with_not_found() {
    let mut store = fresh_store();

    let changed = NewTransaction::parse(Kind::Income, "Salario", "1", "2024-02-01", None).unwrap();
    assert!(matches!(
        TransactionLogic::update(&mut store, 42, &changed),
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        TransactionLogic::get(&store, 42),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn test_add_category_rejects_seeded_duplicate() {
    let mut store = fresh_store();

    let res = CategoryLogic::add(&mut store, "Alimentos", Kind::Expense);
    assert!(matches!(res, Err(AppError::DuplicateName(name)) if name == "Alimentos"));

    // uniqueness spans both kinds
    let res = CategoryLogic::add(&mut store, "Salario", Kind::Expense);
    assert!(matches!(res, Err(AppError::DuplicateName(_))));
}

#[test]
fn test_add_category_is_case_sensitive_and_trimmed() {
    let mut store = fresh_store();

    CategoryLogic::add(&mut store, "alimentos", Kind::Expense).expect("different case is allowed");

    let id = CategoryLogic::add(&mut store, "  Mascotas  ", Kind::Expense).unwrap();
    assert_eq!(CategoryLogic::get(&store, id).unwrap().name, "Mascotas");

    let res = CategoryLogic::add(&mut store, " Mascotas", Kind::Income);
    assert!(matches!(res, Err(AppError::DuplicateName(_))));
}

#[test]
fn test_add_category_rejects_empty_name() {
    let mut store = fresh_store();

    let res = CategoryLogic::add(&mut store, "   ", Kind::Income);
    assert!(matches!(res, Err(AppError::Validation(_))));
    assert_eq!(CategoryLogic::list(&store).unwrap().len(), 7);
}

#[test]
fn test_list_names_by_kind() {
    let store = fresh_store();

    assert_eq!(
        CategoryLogic::list_names(&store, Kind::Income).unwrap(),
        vec!["Freelance", "Inversiones", "Salario"]
    );
}

#[test]
fn test_delete_category_guarded_by_transactions() {
    let mut store = fresh_store();
    let cat = CategoryLogic::find(&store, "Vivienda").unwrap().unwrap();

    let id = TransactionLogic::add(&mut store, Kind::Expense, "Vivienda", "700", "2024-01-01", None).unwrap();

    match CategoryLogic::delete(&mut store, cat.id) {
        Err(AppError::Referential { name, count }) => {
            assert_eq!(name, "Vivienda");
            assert_eq!(count, 1);
        }
        other => panic!("expected referential error, got {:?}", other),
    }
    assert!(CategoryLogic::find(&store, "Vivienda").unwrap().is_some());

    TransactionLogic::delete(&mut store, &[id]).unwrap();

    let removed = CategoryLogic::delete(&mut store, cat.id).expect("now deletable");
    assert_eq!(removed.name, "Vivienda");
    assert!(CategoryLogic::find(&store, "Vivienda").unwrap().is_none());
}

#[test]
fn test_delete_category_guard_matches_exact_name() {
    let mut store = fresh_store();
    let cat = CategoryLogic::find(&store, "Alimentos").unwrap().unwrap();

    TransactionLogic::add(&mut store, Kind::Expense, "alimentos", "3", "2024-01-01", None).unwrap();

    CategoryLogic::delete(&mut store, cat.id).expect("lower-case reference does not block");
}

#[test]
fn test_delete_missing_category_fails_with_not_found() {
    let mut store = fresh_store();

    assert!(matches!(
        CategoryLogic::delete(&mut store, 9999),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn test_totals_are_zero_on_empty_store() {
    let store = fresh_store();

    assert_eq!(SummaryLogic::total_by_kind(&store, Kind::Income).unwrap(), Decimal::ZERO);
    assert_eq!(SummaryLogic::total_by_kind(&store, Kind::Expense).unwrap(), Decimal::ZERO);
    assert_eq!(SummaryLogic::balance(&store).unwrap(), Decimal::ZERO);
    assert!(SummaryLogic::expense_totals_by_category(&store).unwrap().is_empty());
}

#[test]
fn test_balance_matches_totals_in_every_state() {
    let mut store = fresh_store();

    let check = |store: &Store| {
        let income = SummaryLogic::total_by_kind(store, Kind::Income).unwrap();
        let expense = SummaryLogic::total_by_kind(store, Kind::Expense).unwrap();
        assert_eq!(income - expense, SummaryLogic::balance(store).unwrap());
    };

    check(&store);
    let a = TransactionLogic::add(&mut store, Kind::Expense, "Alimentos", "0.10", "2024-01-01", None).unwrap();
    check(&store);
    TransactionLogic::add(&mut store, Kind::Expense, "Alimentos", "0.20", "2024-01-02", None).unwrap();
    check(&store);
    TransactionLogic::add(&mut store, Kind::Income, "Salario", "0.30", "2024-01-03", None).unwrap();
    check(&store);
    assert_eq!(SummaryLogic::balance(&store).unwrap(), Decimal::ZERO);
    TransactionLogic::delete(&mut store, &[a]).unwrap();
    check(&store);
    assert_eq!(SummaryLogic::balance(&store).unwrap(), dec("0.10"));
}

#[test]
fn test_expense_totals_grouped_and_sorted() {
    let mut store = fresh_store();

    TransactionLogic::add(&mut store, Kind::Expense, "Transporte", "10", "2024-01-01", None).unwrap();
    TransactionLogic::add(&mut store, Kind::Expense, "Vivienda", "500", "2024-01-02", None).unwrap();
    TransactionLogic::add(&mut store, Kind::Expense, "Transporte", "15.5", "2024-01-03", None).unwrap();
    TransactionLogic::add(&mut store, Kind::Expense, "Alimentos", "25.5", "2024-01-04", None).unwrap();
    TransactionLogic::add(&mut store, Kind::Income, "Salario", "9999", "2024-01-05", None).unwrap();

    let totals: Vec<(String, Decimal)> = SummaryLogic::expense_totals_by_category(&store)
        .unwrap()
        .into_iter()
        .map(|t| (t.category, t.total))
        .collect();

    // Alimentos and Transporte tie at 25.5: name order
    assert_eq!(
        totals,
        vec![
            ("Vivienda".to_string(), dec("500")),
            ("Alimentos".to_string(), dec("25.5")),
            ("Transporte".to_string(), dec("25.5")),
        ]
    );
}

#[test]
fn test_reference_scenario() {
    let mut store = fresh_store();

    TransactionLogic::add(&mut store, Kind::Expense, "Alimentos", "25.50", "2024-01-15", None).unwrap();
    TransactionLogic::add(&mut store, Kind::Income, "Salario", "1000", "2024-01-01", None).unwrap();

    assert_eq!(SummaryLogic::balance(&store).unwrap(), dec("974.50"));

    let summary = SummaryLogic::summary(&store).unwrap();
    assert_eq!(summary.total_income, dec("1000"));
    assert_eq!(summary.total_expense, dec("25.50"));
    assert_eq!(summary.balance, dec("974.50"));
    assert_eq!(summary.expenses_by_category.len(), 1);
    assert_eq!(summary.expenses_by_category[0].category, "Alimentos");
    assert_eq!(summary.expenses_by_category[0].total, dec("25.50"));
}

#[test]
fn test_store_persists_across_open_and_close() {
    let mut path = env::temp_dir();
    path.push("store_persists_rfinanzas.sqlite");
    std::fs::remove_file(&path).ok();

    {
        let mut store = Store::open(&path).expect("open file store");
        init_db(&store).unwrap();
        TransactionLogic::add(&mut store, Kind::Income, "Freelance", "120", "2024-05-05", None).unwrap();
        store.close().expect("close");
    }

    let store = Store::open(&path).expect("reopen");
    let report = init_db(&store).unwrap();
    assert!(report.migrations.is_empty());

    let txs = TransactionLogic::list(&store, KindFilter::All).unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].category, "Freelance");
    assert_eq!(store.path(), Some(path.as_path()));

    store.close().unwrap();
    std::fs::remove_file(&path).ok();
}
