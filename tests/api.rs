use actix_web::web::Data;
use actix_web::{App, HttpServer};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sales_api::client::SalesClient;
use sales_api::error::LoadError;
use sales_api::models::SalesRecordData;
use sales_api::services::record_store::{lock_store, RecordStore, SharedRecordStore};
use sales_api::services::spreadsheet_loader::SpreadsheetLoader;
use sales_api::{configure, create_mediator_service};
use std::collections::HashSet;
use std::path::PathBuf;

const FIXTURE_ROWS: usize = 5;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("Foodsales.xlsx")
}

fn load_fixture() -> SharedRecordStore {
    let mut store = RecordStore::new();
    let loaded = SpreadsheetLoader::new(fixture_path())
        .load_into(&mut store)
        .expect("Failed to load fixture");
    assert_eq!(loaded, FIXTURE_ROWS);
    store.into_shared()
}

/// Starts the server on an ephemeral port and returns a client pointing at it.
fn spawn_server(store: &SharedRecordStore) -> SalesClient {
    let mediator = create_mediator_service(store);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(Data::new(mediator.clone()))
            .configure(configure)
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("Failed to bind test server");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    SalesClient::new(format!("http://{}", addr))
}

fn new_sale(quantity: i64) -> SalesRecordData {
    SalesRecordData {
        order_date: NaiveDate::from_ymd_opt(2023, 7, 4)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
        region: "West".to_owned(),
        city: "San Diego".to_owned(),
        category: "Snacks".to_owned(),
        product: "Potato Chips".to_owned(),
        quantity,
        unit_price: Decimal::new(200, 2),
        total_price: Decimal::new(200 * quantity, 2),
    }
}

#[test]
fn fixture_loads_every_data_row() {
    let store = load_fixture();
    let records = lock_store(&store).get_all();

    let ids = records.iter().map(|r| r.id).collect::<HashSet<_>>();
    assert_eq!(ids.len(), FIXTURE_ROWS);
    assert!(ids.iter().all(|id| (1..=FIXTURE_ROWS as u32).contains(id)));

    let first = &records[0];
    assert_eq!(first.id, 1);
    assert_eq!(
        first.order_date,
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap()
    );
    assert_eq!(first.region, "East");
    assert_eq!(first.city, "Boston");
    assert_eq!(first.category, "Bars");
    assert_eq!(first.product, "Carrot");
    assert_eq!(first.quantity, 33);
    assert_eq!(first.unit_price, Decimal::new(177, 2));
    assert_eq!(first.total_price, Decimal::new(5841, 2));

    let last = &records[FIXTURE_ROWS - 1];
    assert_eq!(last.product, "Arrowroot");
    assert_eq!(last.quantity, 38);
}

#[test]
fn missing_spreadsheet_is_an_error() {
    let mut store = RecordStore::new();
    let err = SpreadsheetLoader::new(fixture_path().with_file_name("Missing.xlsx"))
        .load_into(&mut store)
        .unwrap_err();

    assert!(matches!(err, LoadError::Open { .. }));
}

#[actix_web::test]
async fn client_round_trip_against_running_server() {
    let store = load_fixture();
    let client = spawn_server(&store);

    let all = client.get_all_records().await.unwrap();
    assert_eq!(all.len(), FIXTURE_ROWS);

    let created = client.create_record(&new_sale(4)).await.unwrap();
    assert_eq!(created.id, FIXTURE_ROWS as u32 + 1);
    assert_eq!(created.data(), new_sale(4));

    let fetched = client.get_record(created.id).await.unwrap();
    assert_eq!(fetched, Some(created.clone()));

    assert!(client.update_record(created.id, &new_sale(9)).await.unwrap());
    let updated = client.get_record(created.id).await.unwrap().unwrap();
    assert_eq!(updated.quantity, 9);
    assert_eq!(updated.total_price, Decimal::new(1800, 2));

    assert!(client.delete_record(created.id).await.unwrap());
    assert_eq!(client.get_record(created.id).await.unwrap(), None);
    assert_eq!(client.get_all_records().await.unwrap().len(), FIXTURE_ROWS);

    let next = client.create_record(&new_sale(1)).await.unwrap();
    assert!(next.id > created.id);
}

#[actix_web::test]
async fn client_reports_missing_records() {
    let store = load_fixture();
    let client = spawn_server(&store);

    assert_eq!(client.get_record(999).await.unwrap(), None);
    assert!(!client.update_record(999, &new_sale(2)).await.unwrap());
    assert!(!client.delete_record(999).await.unwrap());
    assert_eq!(lock_store(&store).len(), FIXTURE_ROWS);
}
