/// Every field the backend (and the downstream ip-api.com provider) can
/// return, in wire order.
pub const ALL_FIELDS: [&str; 22] = [
    "continent",
    "continentCode",
    "country",
    "countryCode",
    "region",
    "regionName",
    "city",
    "district",
    "zip",
    "lat",
    "lon",
    "timezone",
    "offset",
    "isp",
    "org",
    "as",
    "asname",
    "mobile",
    "proxy",
    "hosting",
    "query",
    "reverse",
];

/// The default query set: everything except the trailing `reverse`, which
/// the provider only resolves on demand.
pub const DEFAULT_FIELDS: [&str; 21] = [
    "continent",
    "continentCode",
    "country",
    "countryCode",
    "region",
    "regionName",
    "city",
    "district",
    "zip",
    "lat",
    "lon",
    "timezone",
    "offset",
    "isp",
    "org",
    "as",
    "asname",
    "mobile",
    "proxy",
    "hosting",
    "query",
];
