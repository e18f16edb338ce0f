// 📜 Champion Catalog - compiled-in table
//
// Insertion order is display order. A malformed entry here is a build
// defect, so loading has no error path.

use crate::champion::Champion;

static CHAMPIONS: [Champion; 8] = [
    Champion::keyed(1, "ziggs_name", "ziggs_title", "ziggs_description", "ziggs"),
    Champion::keyed(2, "vi_name", "vi_title", "vi_description", "vi"),
    Champion::keyed(3, "jinx_name", "jinx_title", "jinx_description", "jinx"),
    Champion::keyed(4, "ekko_name", "ekko_title", "ekko_description", "ekko"),
    Champion::keyed(5, "caitlyn_name", "caitlyn_title", "caitlyn_description", "caitlyn"),
    Champion::keyed(
        6,
        "heimerdinger_name",
        "heimerdinger_title",
        "heimerdinger_description",
        "heimerdinger",
    ),
    Champion::keyed(7, "jayce_name", "jayce_title", "jayce_description", "jayce"),
    Champion::keyed(8, "viktor_name", "viktor_title", "viktor_description", "viktor"),
];

/// Load the catalog in display order
pub fn load() -> Vec<Champion> {
    CHAMPIONS.to_vec()
}
