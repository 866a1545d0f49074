//! Shared workbook fixture mirroring the classic three-sheet people export:
//! `sheet1` and `sheet2` hold a header row plus people 1-24 and 25-50,
//! `sheet3` has blank rows, a whitespace-only row and a missing last name.
#![allow(dead_code)]

use excel2json_sheet::{CellValue, Sheet, Workbook};
use rust_xlsxwriter::Workbook as XlsxWorkbook;
use std::path::Path;

pub const HEADER: [&str; 6] = ["id", "first_name", "last_name", "email", "gender", "ip_address"];

pub type Person = (i64, &'static str, &'static str, &'static str, &'static str, &'static str);

pub const PEOPLE: [Person; 50] = [
    (1, "Judith", "Bennett", "jbennett0@cargocollective.com", "Female", "190.37.72.226"),
    (2, "Denise", "Ramirez", "dramirez1@woothemes.com", "Female", "13.63.225.90"),
    (3, "Antonio", "Henderson", "ahenderson2@mapquest.com", "Male", "186.224.18.54"),
    (4, "Matthew", "Jacobs", "mjacobs3@hatena.ne.jp", "Male", "71.115.204.8"),
    (5, "Jacqueline", "Hawkins", "jhawkins4@usatoday.com", "Female", "112.161.144.113"),
    (6, "Betty", "George", "bgeorge5@cnbc.com", "Female", "151.9.214.150"),
    (7, "Nicholas", "Cole", "ncole6@digg.com", "Male", "130.113.34.123"),
    (8, "Christina", "Fields", "cfields7@icio.us", "Female", "158.175.78.96"),
    (9, "John", "Cole", "jcole8@github.com", "Male", "87.198.248.122"),
    (10, "Carolyn", "Marshall", "cmarshall9@acquirethisname.com", "Female", "169.241.125.206"),
    (11, "Albert", "Schmidt", "aschmidta@imdb.com", "Male", "82.36.174.49"),
    (12, "Lillian", "Bennett", "lbennettb@ca.gov", "Female", "227.130.226.191"),
    (13, "Kathy", "Payne", "kpaynec@mozilla.org", "Female", "189.92.180.236"),
    (14, "Jack", "Ferguson", "jfergusond@youku.com", "Male", "237.228.12.35"),
    (15, "Jean", "Gordon", "jgordone@tinypic.com", "Female", "82.238.48.246"),
    (16, "John", "Clark", "jclarkf@google.com", "Male", "43.126.79.189"),
    (17, "Pamela", "Gilbert", "pgilbertg@china.com.cn", "Female", "22.163.47.237"),
    (18, "Deborah", "Banks", "dbanksh@umn.edu", "Female", "221.123.73.42"),
    (19, "Emily", "Hamilton", "ehamiltoni@craigslist.org", "Female", "30.169.177.251"),
    (20, "Katherine", "Jones", "kjonesj@behance.net", "Female", "228.11.87.66"),
    (21, "Ruby", "Stanley", "rstanleyk@w3.org", "Female", "60.65.225.158"),
    (22, "Juan", "Pierce", "jpiercel@miitbeian.gov.cn", "Male", "116.251.134.70"),
    (23, "Rachel", "Long", "rlongm@usnews.com", "Female", "137.30.106.203"),
    (24, "Debra", "Oliver", "dolivern@yolasite.com", "Female", "187.87.117.203"),
    (25, "Jack", "Bishop", "jbishopo@businessinsider.com", "Male", "154.11.84.148"),
    (26, "Alice", "Cook", "acookp@theatlantic.com", "Female", "253.251.171.169"),
    (27, "Denise", "Hart", "dhartq@free.fr", "Female", "41.7.18.202"),
    (28, "Susan", "Oliver", "soliverr@narod.ru", "Female", "30.73.25.111"),
    (29, "Christopher", "Watson", "cwatsons@ibm.com", "Male", "237.207.183.205"),
    (30, "Howard", "Ray", "hrayt@typepad.com", "Male", "110.31.192.119"),
    (31, "Doris", "Banks", "dbanksu@tripod.com", "Female", "93.158.23.15"),
    (32, "Tammy", "Duncan", "tduncanv@who.int", "Female", "36.223.211.101"),
    (33, "Brandon", "Nelson", "bnelsonw@nsw.gov.au", "Male", "149.230.247.47"),
    (34, "Janice", "Banks", "jbanksx@reverbnation.com", "Female", "225.10.207.129"),
    (35, "Randy", "Gardner", "rgardnery@cdc.gov", "Male", "136.250.243.202"),
    (36, "Denise", "Burton", "dburtonz@timesonline.co.uk", "Female", "254.185.104.57"),
    (37, "Paul", "Rogers", "progers10@npr.org", "Male", "188.219.107.207"),
    (38, "Johnny", "Fernandez", "jfernandez11@amazonaws.com", "Male", "233.164.136.180"),
    (39, "Jane", "Mason", "jmason12@phpbb.com", "Female", "156.240.141.240"),
    (40, "Scott", "Day", "sday13@prnewswire.com", "Male", "154.188.18.107"),
    (41, "Philip", "White", "pwhite14@exblog.jp", "Male", "73.100.195.152"),
    (42, "Kenneth", "Duncan", "kduncan15@people.com.cn", "Male", "105.112.16.103"),
    (43, "Joseph", "Price", "jprice16@cmu.edu", "Male", "33.92.219.103"),
    (44, "Edward", "Howard", "ehoward17@businessinsider.com", "Male", "38.179.117.21"),
    (45, "Frances", "Wells", "fwells18@slashdot.org", "Female", "75.126.73.137"),
    (46, "Ashley", "Davis", "adavis19@slideshare.net", "Female", "73.140.223.76"),
    (47, "Clarence", "Hicks", "chicks1a@epa.gov", "Male", "92.13.200.140"),
    (48, "Sharon", "Stone", "sstone1b@biblegateway.com", "Female", "38.83.41.214"),
    (49, "Scott", "Shaw", "sshaw1c@senate.gov", "Male", "84.180.189.90"),
    (50, "Susan", "Miller", "smiller1d@china.com.cn", "Female", "244.232.244.90"),
];

pub fn person(id: i64) -> &'static Person {
    &PEOPLE[(id - 1) as usize]
}

/// Spreadsheet numbers come back from files as floats
pub fn person_row(id: i64) -> Vec<Option<CellValue>> {
    let (id, first, last, email, gender, ip) = *person(id);
    vec![
        Some(CellValue::Float(id as f64)),
        Some(CellValue::from(first)),
        Some(CellValue::from(last)),
        Some(CellValue::from(email)),
        Some(CellValue::from(gender)),
        Some(CellValue::from(ip)),
    ]
}

pub fn header_row() -> Vec<Option<CellValue>> {
    HEADER.iter().map(|h| Some(CellValue::from(*h))).collect()
}

pub fn sheet1() -> Sheet {
    let mut rows = vec![header_row()];
    rows.extend((1..=24).map(person_row));
    Sheet::from_cells(rows)
}

pub fn sheet2() -> Sheet {
    let mut rows = vec![header_row()];
    rows.extend((25..=50).map(person_row));
    Sheet::from_cells(rows)
}

/// Row 0 and row 3 are missing, row 16 holds only whitespace and
/// person 42 has no last name.
pub fn sheet3() -> Sheet {
    let mut rows = vec![Vec::new(), header_row(), person_row(25), Vec::new()];
    rows.extend((26..=37).map(person_row));
    rows.push(vec![
        Some(CellValue::from("  ")),
        Some(CellValue::from("     ")),
        Some(CellValue::from("     ")),
        Some(CellValue::from("     ")),
        Some(CellValue::from("     ")),
    ]);
    rows.extend((38..=43).map(person_row));

    let mut sheet = Sheet::from_cells(rows);
    sheet.clear(21, 2);
    sheet
}

pub fn workbook() -> Workbook {
    let mut book = Workbook::new();
    book.add_sheet("sheet1", sheet1()).unwrap();
    book.add_sheet("sheet2", sheet2()).unwrap();
    book.add_sheet("sheet3", sheet3()).unwrap();
    book
}

/// Save a workbook as an xlsx file
pub fn write_xlsx(book: &Workbook, path: &Path) {
    let mut xlsx = XlsxWorkbook::new();

    for (name, sheet) in book.sheets() {
        let worksheet = xlsx.add_worksheet();
        worksheet.set_name(name).unwrap();

        for row in 0..sheet.row_count() {
            for col in 0..sheet.col_count() {
                let (r, c) = (row as u32, col as u16);
                match sheet.cell(row, col) {
                    None | Some(CellValue::Null) => {}
                    Some(CellValue::Bool(b)) => {
                        worksheet.write_boolean(r, c, *b).unwrap();
                    }
                    Some(CellValue::Int(i)) => {
                        worksheet.write_number(r, c, *i as f64).unwrap();
                    }
                    Some(CellValue::Float(f)) => {
                        worksheet.write_number(r, c, *f).unwrap();
                    }
                    Some(CellValue::String(s)) => {
                        worksheet.write_string(r, c, s).unwrap();
                    }
                }
            }
        }
    }

    xlsx.save(path).unwrap();
}
