//! CSV ingestion, column resolution, export

use crate::common::*;
use ulasan::table::write_csv_path;
use ulasan::{export_rows, find_column, Error, ReviewTable};

const SCRAPED: &str = "\
reviewId,userName,content,score,thumbsUpCount
1,Budi,\"Barang bagus sekali, pengiriman cepat!\",5,3
2,Siti,,3,0
3,Andi,Produk rusak dan mengecewakan,1,10
";

#[test]
fn scraped_export_resolves_columns() {
    let table = ReviewTable::from_csv_reader(SCRAPED.as_bytes(), None).unwrap();
    assert_eq!(table.review_column().name, "content");
    assert_eq!(table.review_column().index, 2);
    assert_eq!(table.username_column().unwrap().name, "userName");
    assert_eq!(table.score_column().unwrap().name, "score");
    assert_eq!(table.len(), 3);
}

#[test]
fn empty_cell_becomes_placeholder_review() {
    let table = ReviewTable::from_csv_reader(SCRAPED.as_bytes(), None).unwrap();
    let records = sequential().preprocess_reviews(&table.reviews()).unwrap();

    assert_eq!(records[1].original, "-");
    assert_eq!(records[1].final_text, "");
}

#[test]
fn first_alias_wins() {
    let headers = ["ulasan", "comment", "review_text"];
    let found = find_column(&headers, ulasan::table::REVIEW_COLUMNS).unwrap();
    assert_eq!(found.name, "comment");
}

#[test]
fn missing_review_column_rejected_before_processing() {
    let err = ReviewTable::from_csv_reader("id,nama\n1,x\n".as_bytes(), None).unwrap_err();
    assert!(matches!(err, Error::InputFormat { .. }));
    assert!(err.is_input_error());
}

#[test]
fn missing_file_is_io_error() {
    let err = ReviewTable::from_path(std::path::Path::new("/nonexistent/reviews.csv"), None).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn csv_round_trip_through_export() {
    let input = TempFile::new("reviews.csv", SCRAPED);
    let table = ReviewTable::from_path(&input.path, None).unwrap();
    let records = parallel().preprocess_reviews(&table.reviews()).unwrap();

    let rows = export_rows(&records, Some(&table));
    let out = input.sibling("hasil.csv");
    write_csv_path(&out, &rows).unwrap();

    let mut reader = csv::Reader::from_path(&out).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(
        headers,
        vec!["Username", "Score", "Review Original", "Final Text", "Sentiment Score", "Sentiment Label"]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][0], "Budi");
    assert_eq!(&rows[0][1], "5");
    assert_eq!(&rows[0][2], "Barang bagus sekali, pengiriman cepat!");
    assert_eq!(&rows[0][3], "barang bagus sekali kirim cepat");
    assert_eq!(&rows[0][5], "Positif");
    assert_eq!(&rows[1][5], "Netral");
    assert_eq!(&rows[2][0], "Andi");
    assert_eq!(&rows[2][5], "Negatif");
}

#[test]
fn invalid_bytes_are_dropped_not_split() {
    let input = TempFile::new("placeholder", "");
    let path = input.sibling("rusak.csv");
    std::fs::write(&path, b"content\nba\xffgus sekali\n").unwrap();

    let table = ReviewTable::from_path(&path, None).unwrap();
    let records = sequential().preprocess_reviews(&table.reviews()).unwrap();
    assert_eq!(records[0].tokens, vec!["bagus", "sekali"]);
}

#[test]
fn export_without_metadata_uses_placeholders() {
    let records = sequential().preprocess_reviews(&SCENARIO_REVIEWS).unwrap();
    let rows = export_rows(&records, None);
    assert!(rows.iter().all(|r| r.username == "-" && r.score == "-"));
    assert_eq!(rows[2].review_original, SCENARIO_REVIEWS[2]);
}
