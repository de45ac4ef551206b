use std::path::Path;

use inflections::case::to_snake_case;

pub const DEFAULT_CONSTRUCTOR_COLOR: &str = "#888888";

/// # normalize a loosely-formatted identifier
/// lowercase, drop the marketing " f1 team" suffix, separators to
/// underscores. the result is the key used by every lookup table here.
pub fn normalize_key(name: &str) -> String {
    to_snake_case(&name.to_lowercase().replace(" f1 team", ""))
}

/// # constructor name to accent color
/// unknown constructors get the neutral fallback, never an error.
pub fn constructor_color(constructor_name: &str) -> &'static str {
    let key = normalize_key(constructor_name);

    lookup_exact(CONSTRUCTOR_COLORS, &key).unwrap_or(DEFAULT_CONSTRUCTOR_COLOR)
}

/// # driver id to official headshot url
pub fn driver_image_url(driver_id: &str) -> Option<&'static str> {
    lookup_exact(DRIVER_IMAGES, driver_id)
}

/// # circuit id to track outline image
/// locally served assets win over the external media urls, but only when the
/// file actually exists on disk. exact matches win over normalized ones, and
/// the bounded substring fallback resolves ambiguity longest-key-first so
/// the iteration order of the table never changes the result.
pub fn track_image_url(circuit_id: &str) -> Option<&'static str> {
    let normalized = normalize_key(circuit_id);

    if let Some(path) = lookup_exact(LOCAL_TRACK_IMAGES, circuit_id)
        .or_else(|| lookup_exact(LOCAL_TRACK_IMAGES, &normalized))
    {
        if local_asset_exists(path) {
            return Some(path);
        }
    }

    lookup_exact(EXTERNAL_TRACK_IMAGES, circuit_id)
        .or_else(|| lookup_exact(EXTERNAL_TRACK_IMAGES, &normalized))
        .or_else(|| lookup_partial(EXTERNAL_TRACK_IMAGES, &normalized))
}

fn lookup_exact(table: &'static [(&str, &str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| *value)
}

fn lookup_partial(table: &'static [(&str, &str)], key: &str) -> Option<&'static str> {
    if key.is_empty() {
        return None;
    }

    table
        .iter()
        .filter(|(candidate, _)| key.contains(candidate) || candidate.contains(key))
        .max_by_key(|(candidate, _)| candidate.len())
        .map(|(_, value)| *value)
}

fn local_asset_exists(url_path: &str) -> bool {
    Path::new(url_path.trim_start_matches('/')).exists()
}

const CONSTRUCTOR_COLORS: &[(&str, &str)] = &[
    ("mclaren", "#FF8000"),
    ("red_bull", "#3671C6"),
    ("ferrari", "#E80020"),
    ("mercedes", "#27F4D2"),
    ("aston_martin", "#229971"),
    ("alpine", "#0093CC"),
    ("williams", "#64C4FF"),
    ("haas", "#B6BABD"),
    ("kick_sauber", "#52E252"),
    ("sauber", "#52E252"),
    ("rb", "#6692FF"),
];

const DRIVER_IMAGES: &[(&str, &str)] = &[
    ("norris", "https://media.formula1.com/content/dam/fom-website/drivers/L/LANNOR01_Lando_Norris/lannor01.png"),
    ("max_verstappen", "https://media.formula1.com/content/dam/fom-website/drivers/M/MAXVER01_Max_Verstappen/maxver01.png"),
    ("piastri", "https://media.formula1.com/content/dam/fom-website/drivers/O/OSCPIA01_Oscar_Piastri/oscpia01.png"),
    ("russell", "https://media.formula1.com/content/dam/fom-website/drivers/G/GEORUS01_George_Russell/georus01.png"),
    ("leclerc", "https://media.formula1.com/content/dam/fom-website/drivers/C/CHALEC01_Charles_Leclerc/chalec01.png"),
    ("hamilton", "https://media.formula1.com/content/dam/fom-website/drivers/L/LEWHAM01_Lewis_Hamilton/lewham01.png"),
    ("antonelli", "https://media.formula1.com/content/dam/fom-website/drivers/A/ANDANT01_Andrea%20Kimi_Antonelli/andant01.png"),
    ("albon", "https://media.formula1.com/content/dam/fom-website/drivers/A/ALEALB01_Alexander_Albon/alealb01.png"),
    ("sainz", "https://media.formula1.com/content/dam/fom-website/drivers/C/CARSAI01_Carlos_Sainz/carsai01.png"),
    ("alonso", "https://media.formula1.com/content/dam/fom-website/drivers/F/FERALO01_Fernando_Alonso/feralo01.png"),
    ("hulkenberg", "https://media.formula1.com/content/dam/fom-website/drivers/N/NICHUL01_Nico_Hulkenberg/nichul01.png"),
    ("hadjar", "https://media.formula1.com/content/dam/fom-website/drivers/I/ISAHAD01_Isack_Hadjar/isahad01.png"),
    ("bearman", "https://media.formula1.com/content/dam/fom-website/drivers/O/OLIBEA01_Oliver_Bearman/olibea01.png"),
    ("lawson", "https://media.formula1.com/content/dam/fom-website/drivers/L/LIALAW01_Liam_Lawson/lialaw01.png"),
    ("ocon", "https://media.formula1.com/content/dam/fom-website/drivers/E/ESTOCO01_Esteban_Ocon/estoco01.png"),
    ("stroll", "https://media.formula1.com/content/dam/fom-website/drivers/L/LANSTR01_Lance_Stroll/lanstr01.png"),
    ("tsunoda", "https://media.formula1.com/content/dam/fom-website/drivers/Y/YUKTSU01_Yuki_Tsunoda/yuktsu01.png"),
    ("gasly", "https://media.formula1.com/content/dam/fom-website/drivers/P/PIEGAS01_Pierre_Gasly/piegas01.png"),
    ("bortoleto", "https://media.formula1.com/content/dam/fom-website/drivers/G/GRABBOR01_Gabriel_Bortoleto/grabbor01.png"),
    ("colapinto", "https://media.formula1.com/content/dam/fom-website/drivers/F/FRACOL01_Franco_Colapinto/fracol01.png"),
    ("doohan", "https://media.formula1.com/content/dam/fom-website/drivers/J/JACDOO01_Jack_Doohan/jacdoo01.png"),
];

const LOCAL_TRACK_IMAGES: &[(&str, &str)] = &[
    ("albert_park", "/static/img/tracks/Australia_Circuit.avif"),
    ("shanghai", "/static/img/tracks/China_Circuit.avif"),
    ("suzuka", "/static/img/tracks/Japan_Circuit.avif"),
    ("bahrain", "/static/img/tracks/Bahrain_Circuit.avif"),
    ("jeddah", "/static/img/tracks/Saudi_Arabia_Circuit.avif"),
    ("miami", "/static/img/tracks/Miami_Circuit.avif"),
    ("imola", "/static/img/tracks/Emilia_Romagna_Circuit.avif"),
    ("monaco", "/static/img/tracks/Monaco_Circuit.avif"),
    ("villeneuve", "/static/img/tracks/Canada_Circuit.avif"),
    ("barcelona", "/static/img/tracks/Spain_Circuit.avif"),
    ("red_bull_ring", "/static/img/tracks/Austria_Circuit.avif"),
    ("silverstone", "/static/img/tracks/Great_Britain_Circuit.avif"),
    ("hungaroring", "/static/img/tracks/Hungary_Circuit.avif"),
    ("spa", "/static/img/tracks/Belgium_Circuit.avif"),
    ("zandvoort", "/static/img/tracks/Netherlands_Circuit.avif"),
    ("monza", "/static/img/tracks/Italy_Circuit.avif"),
    ("baku", "/static/img/tracks/Baku_Circuit.avif"),
    ("marina_bay", "/static/img/tracks/Singapore_Circuit.avif"),
    ("americas", "/static/img/tracks/USA_Circuit.avif"),
    ("rodriguez", "/static/img/tracks/Mexico_Circuit.avif"),
    ("interlagos", "/static/img/tracks/Brazil_Circuit.avif"),
    ("vegas", "/static/img/tracks/Las_Vegas_Circuit.avif"),
    ("losail", "/static/img/tracks/Qatar_Circuit.avif"),
    ("yas_marina", "/static/img/tracks/Abu_Dhabi_Circuit.avif"),
];

const EXTERNAL_TRACK_IMAGES: &[(&str, &str)] = &[
    ("albert_park", "https://media.formula1.com/image/upload/f_auto/q_auto/v1677245035/content/dam/fom-website/2018-redesign-assets/Track%20Outline%20Images/Australia.png"),
    ("shanghai", "https://media.formula1.com/image/upload/f_auto/q_auto/v1677245030/content/dam/fom-website/2018-redesign-assets/Track%20Outline%20Images/China.png"),
    ("suzuka", "https://media.formula1.com/image/upload/f_auto/q_auto/v1677245033/content/dam/fom-website/2018-redesign-assets/Track%20Outline%20Images/Japan.png"),
    ("bahrain", "https://media.formula1.com/image/upload/f_auto/q_auto/v1677245035/content/dam/fom-website/2018-redesign-assets/Track%20Outline%20Images/Bahrain.png"),
    ("jeddah", "https://media.formula1.com/image/upload/f_auto/q_auto/v1677245030/content/dam/fom-website/2018-redesign-assets/Track%20Outline%20Images/Saudi%20Arabia.png"),
    ("miami", "https://media.formula1.com/image/upload/f_auto/q_auto/v1677245032/content/dam/fom-website/2018-redesign-assets/Track%20Outline%20Images/Miami.png"),
    ("imola", "https://media.formula1.com/image/upload/f_auto/q_auto/v1677245031/content/dam/fom-website/2018-redesign-assets/Track%20Outline%20Images/Emilia%20Romagna.png"),
    ("monaco", "https://media.formula1.com/image/upload/f_auto/q_auto/v1677245032/content/dam/fom-website/2018-redesign-assets/Track%20Outline%20Images/Monaco.png"),
    ("villeneuve", "https://media.formula1.com/image/upload/f_auto/q_auto/v1677245030/content/dam/fom-website/2018-redesign-assets/Track%20Outline%20Images/Canada.png"),
    ("barcelona", "https://media.formula1.com/image/upload/f_auto/q_auto/v1680529432/content/dam/fom-website/2018-redesign-assets/Track%20Outline%20Images/Spain.png"),
    ("red_bull_ring", "https://media.formula1.com/image/upload/f_auto/q_auto/v1677245035/content/dam/fom-website/2018-redesign-assets/Track%20Outline%20Images/Austria.png"),
    ("silverstone", "https://media.formula1.com/image/upload/f_auto/q_auto/v1677245033/content/dam/fom-website/2018-redesign-assets/Track%20Outline%20Images/Great%20Britain.png"),
    ("hungaroring", "https://media.formula1.com/image/upload/f_auto/q_auto/v1677245031/content/dam/fom-website/2018-redesign-assets/Track%20Outline%20Images/Hungary.png"),
    ("spa", "https://media.formula1.com/image/upload/f_auto/q_auto/v1677245035/content/dam/fom-website/2018-redesign-assets/Track%20Outline%20Images/Belgium.png"),
    ("zandvoort", "https://media.formula1.com/image/upload/f_auto/q_auto/v1677245032/content/dam/fom-website/2018-redesign-assets/Track%20Outline%20Images/Netherlands.png"),
    ("monza", "https://media.formula1.com/image/upload/f_auto/q_auto/v1677245031/content/dam/fom-website/2018-redesign-assets/Track%20Outline%20Images/Italy.png"),
    ("baku", "https://media.formula1.com/image/upload/f_auto/q_auto/v1677245035/content/dam/fom-website/2018-redesign-assets/Track%20Outline%20Images/Azerbaijan.png"),
    ("marina_bay", "https://media.formula1.com/image/upload/f_auto/q_auto/v1683639459/content/dam/fom-website/2018-redesign-assets/Track%20Outline%20Images/Singapore.png"),
    ("americas", "https://media.formula1.com/image/upload/f_auto/q_auto/v1677245034/content/dam/fom-website/2018-redesign-assets/Track%20Outline%20Images/USA.png"),
    ("rodriguez", "https://media.formula1.com/image/upload/f_auto/q_auto/v1677245032/content/dam/fom-website/2018-redesign-assets/Track%20Outline%20Images/Mexico.png"),
    ("interlagos", "https://media.formula1.com/image/upload/f_auto/q_auto/v1677245035/content/dam/fom-website/2018-redesign-assets/Track%20Outline%20Images/Brazil.png"),
    ("vegas", "https://media.formula1.com/image/upload/f_auto/q_auto/v1677249931/content/dam/fom-website/2018-redesign-assets/Track%20Outline%20Images/Las%20Vegas.png"),
    ("losail", "https://media.formula1.com/image/upload/f_auto/q_auto/v1677245032/content/dam/fom-website/2018-redesign-assets/Track%20Outline%20Images/Qatar.png"),
    ("yas_marina", "https://media.formula1.com/image/upload/f_auto/q_auto/v1677245035/content/dam/fom-website/2018-redesign-assets/Track%20Outline%20Images/Abu%20Dhabi.png"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_constructor_names() {
        assert_eq!(normalize_key("Red Bull"), "red_bull");
        assert_eq!(normalize_key("Haas F1 Team"), "haas");
        assert_eq!(normalize_key("McLaren"), "mclaren");
        assert_eq!(normalize_key("Aston Martin"), "aston_martin");
    }

    #[test]
    fn known_constructors_get_their_color() {
        assert_eq!(constructor_color("McLaren"), "#FF8000");
        assert_eq!(constructor_color("Red Bull"), "#3671C6");
        assert_eq!(constructor_color("RB F1 Team"), "#6692FF");
    }

    #[test]
    fn unknown_constructors_get_the_fallback_color() {
        assert_eq!(constructor_color("Brawn GP"), DEFAULT_CONSTRUCTOR_COLOR);
        assert_eq!(constructor_color(""), DEFAULT_CONSTRUCTOR_COLOR);
    }

    #[test]
    fn unknown_drivers_have_no_image() {
        assert_eq!(driver_image_url("fangio"), None);
        assert!(driver_image_url("norris").is_some());
    }

    #[test]
    fn circuits_resolve_to_external_images_without_local_assets() {
        let url = track_image_url("albert_park").unwrap();
        assert!(url.contains("Australia"));

        assert_eq!(track_image_url("unknown_circuit"), None);
    }

    #[test]
    fn partial_matches_prefer_the_longest_key() {
        // a hypothetical variant id must resolve through the full circuit
        // key, not a shorter key that also substring-matches
        let url = track_image_url("red_bull_ring_spielberg").unwrap();
        assert!(url.contains("Austria"));
    }

    #[test]
    fn partial_matching_ignores_empty_keys() {
        assert_eq!(lookup_partial(EXTERNAL_TRACK_IMAGES, ""), None);
    }
}
