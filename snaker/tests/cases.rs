//! Conversion tables for the default initialism set.
//!
//! The capital-run cases pin down the scanner's tie-breaks: an initialism is
//! only recognized where the previous rune was not upper-case or the
//! previous token was itself an initialism.

use snaker::{
    camel_to_snake, camel_to_snake_identifier, force_camel_identifier,
    force_lower_camel_identifier, snake_to_camel, snake_to_camel_identifier,
};

fn check(name: &str, f: fn(&str) -> String, cases: &[(&str, &str)]) {
    for (input, expected) in cases {
        assert_eq!(
            f(input),
            *expected,
            "{name}({input:?}) expected {expected:?}"
        );
    }
}

// =============================================================================
// CamelCase -> snake_case
// =============================================================================

#[test]
fn camel_to_snake_table() {
    check(
        "camel_to_snake",
        camel_to_snake,
        &[
            ("", ""),
            ("0", "0"),
            ("_", "_"),
            ("-X-", "-x-"),
            ("-X_", "-x_"),
            ("AReallyLongName", "a_really_long_name"),
            ("SomethingID", "something_id"),
            ("SomethingID_", "something_id_"),
            ("_SomethingID_", "_something_id_"),
            ("_Something-ID_", "_something-id_"),
            ("_Something-IDS_", "_something-ids_"),
            ("_Something-IDs_", "_something-ids_"),
            ("ACL", "acl"),
            ("GPU", "g_p_u"),
            ("zGPU", "z_g_p_u"),
            ("GPUs", "g_p_us"),
            ("!GPU*", "!g_p_u*"),
            ("GpuInfo", "gpu_info"),
            ("GPUInfo", "g_p_u_info"),
            ("gpUInfo", "gp_ui_nfo"),
            ("gpUIDNfo", "gp_uid_nfo"),
            ("gpUIDnfo", "gp_uid_nfo"),
            ("HTTPWriter", "http_writer"),
            ("uHTTPWriter", "u_http_writer"),
            ("UHTTPWriter", "u_h_t_t_p_writer"),
            ("UHTTP_Writer", "u_h_t_t_p_writer"),
            ("UHTTP-Writer", "u_h_t_t_p-writer"),
            ("HTTPHTTP", "http_http"),
            ("uHTTPHTTP", "u_http_http"),
            ("uHTTPHTTPS", "u_http_https"),
            ("uHTTPHTTPS*", "u_http_https*"),
            ("uHTTPSUID*", "u_https_uid*"),
            ("UIDuuidUIDIDUUID", "uid_uuid_uid_id_uuid"),
            ("UID-uuidUIDIDUUID", "uid-uuid_uid_id_uuid"),
            ("UIDzuuidUIDIDUUID", "uid_zuuid_uid_id_uuid"),
            ("UIDzUUIDUIDidUUID", "uid_z_uuid_uid_id_uuid"),
            ("UIDzUUID-UIDidUUID", "uid_z_uuid-uid_id_uuid"),
            ("sampleIDIDS", "sample_id_ids"),
        ],
    );
}

#[test]
fn camel_to_snake_identifier_table() {
    check(
        "camel_to_snake_identifier",
        camel_to_snake_identifier,
        &[
            ("", ""),
            ("0", ""),
            ("_", ""),
            ("-X-", "x"),
            ("-X_", "x"),
            ("AReallyLongName", "a_really_long_name"),
            ("SomethingID", "something_id"),
            ("SomethingID_", "something_id"),
            ("_SomethingID_", "something_id"),
            ("_Something-ID_", "something_id"),
            ("_Something-IDS_", "something_ids"),
            ("_Something-IDs_", "something_ids"),
            ("ACL", "acl"),
            ("GPU", "g_p_u"),
            ("zGPU", "z_g_p_u"),
            ("!GPU*", "g_p_u"),
            ("GpuInfo", "gpu_info"),
            ("GPUInfo", "g_p_u_info"),
            ("gpUInfo", "gp_ui_nfo"),
            ("gpUIDNfo", "gp_uid_nfo"),
            ("gpUIDnfo", "gp_uid_nfo"),
            ("HTTPWriter", "http_writer"),
            ("uHTTPWriter", "u_http_writer"),
            ("UHTTPWriter", "u_h_t_t_p_writer"),
            ("UHTTP_Writer", "u_h_t_t_p_writer"),
            ("UHTTP-Writer", "u_h_t_t_p_writer"),
            ("HTTPHTTP", "http_http"),
            ("uHTTPHTTP", "u_http_http"),
            ("uHTTPHTTPS", "u_http_https"),
            ("uHTTPHTTPS*", "u_http_https"),
            ("uHTTPSUID*", "u_https_uid"),
            ("UIDuuidUIDIDUUID", "uid_uuid_uid_id_uuid"),
            ("UID-uuidUIDIDUUID", "uid_uuid_uid_id_uuid"),
            ("UIDzuuidUIDIDUUID", "uid_zuuid_uid_id_uuid"),
            ("UIDzUUIDUIDidUUID", "uid_z_uuid_uid_id_uuid"),
            ("UIDzUUID-UIDidUUID", "uid_z_uuid_uid_id_uuid"),
            ("SampleIDs", "sample_ids"),
            ("SampleIDS", "sample_ids"),
            ("SampleIDIDs", "sample_id_ids"),
        ],
    );
}

// =============================================================================
// snake_case -> CamelCase
// =============================================================================

#[test]
fn snake_to_camel_table() {
    check(
        "snake_to_camel",
        snake_to_camel,
        &[
            ("", ""),
            ("0", "0"),
            ("_", ""),
            ("x_", "X"),
            ("_x", "X"),
            ("_x_", "X"),
            ("a_really_long_name", "AReallyLongName"),
            ("something_id", "SomethingID"),
            ("something_ids", "SomethingIDs"),
            ("acl", "ACL"),
            ("acl_", "ACL"),
            ("_acl", "ACL"),
            ("_acl_", "ACL"),
            ("_a_c_l_", "ACL"),
            ("gpu_info", "GpuInfo"),
            ("GPU_info", "GpuInfo"),
            ("gPU_info", "GpuInfo"),
            ("g_p_u_info", "GPUInfo"),
            ("uuid_id_uuid", "UUIDIDUUID"),
            ("sample_id_ids", "SampleIDIDs"),
        ],
    );
}

#[test]
fn snake_to_camel_identifier_table() {
    check(
        "snake_to_camel_identifier",
        snake_to_camel_identifier,
        &[
            ("", ""),
            ("_", ""),
            ("0", ""),
            ("000", ""),
            ("_000", ""),
            ("000_", ""),
            ("_000_", ""),
            ("___0--00_", ""),
            ("A0", "A0"),
            ("a_0", "A0"),
            ("a-0", "A0"),
            ("x_", "X"),
            ("_x", "X"),
            ("_x_", "X"),
            ("a_really_long_name", "AReallyLongName"),
            ("_a_really_long_name", "AReallyLongName"),
            ("a_really_long_name_", "AReallyLongName"),
            ("_a_really_long_name_", "AReallyLongName"),
            ("something_id", "SomethingID"),
            ("something-id", "SomethingID"),
            ("-something-id", "SomethingID"),
            ("something-id-", "SomethingID"),
            ("-something-id-", "SomethingID"),
            ("-something_ids-", "SomethingIDs"),
            ("-something_id_s-", "SomethingIDS"),
            ("g_p_u_s", "GPUS"),
            ("acl", "ACL"),
            ("acl_", "ACL"),
            ("_acl", "ACL"),
            ("_acl_", "ACL"),
            ("_a_c_l_", "ACL"),
            ("gpu_info", "GpuInfo"),
            ("g_p_u_info", "GPUInfo"),
            ("uuid_id_uuid", "UUIDIDUUID"),
            ("sample_id_ids", "SampleIDIDs"),
        ],
    );
}

// =============================================================================
// Forced identifiers
// =============================================================================

#[test]
fn force_camel_identifier_table() {
    check(
        "force_camel_identifier",
        force_camel_identifier,
        &[
            ("", ""),
            ("APoorly_named_httpMethod", "APoorlyNamedHTTPMethod"),
            ("XmlHttpACL", "XMLHTTPACL"),
            ("user_ids", "UserIDs"),
            ("created-at", "CreatedAt"),
            ("0", ""),
        ],
    );
}

#[test]
fn force_lower_camel_identifier_table() {
    check(
        "force_lower_camel_identifier",
        force_lower_camel_identifier,
        &[
            ("", ""),
            ("APoorly_named_httpMethod", "aPoorlyNamedHTTPMethod"),
            ("XmlHttpACL", "xmlHTTPACL"),
            ("HTTPWriter", "httpWriter"),
            ("user_ids", "userIDs"),
            ("0", ""),
        ],
    );
}

#[test]
fn readme_walkthrough() {
    let report = [
        format!("CamelCase -> snake_case: {}", camel_to_snake("AnIdentifier")),
        format!("CamelCase -> snake_case (2): {}", camel_to_snake("XMLHTTPACL")),
        format!("snake_case -> CamelCase: {}", snake_to_camel("an_identifier")),
        format!(
            "force CamelCase: {}",
            force_camel_identifier("APoorly_named_httpMethod")
        ),
        format!(
            "force lower camelCase: {}",
            force_lower_camel_identifier("APoorly_named_httpMethod")
        ),
        format!(
            "force lower camelCase (2): {}",
            force_lower_camel_identifier("XmlHttpACL")
        ),
        format!(
            "snake_case identifier -> CamelCase: {}",
            snake_to_camel_identifier("__2__xml___thing---")
        ),
    ]
    .join("\n");

    insta::assert_snapshot!(report, @r"
    CamelCase -> snake_case: an_identifier
    CamelCase -> snake_case (2): xml_http_acl
    snake_case -> CamelCase: AnIdentifier
    force CamelCase: APoorlyNamedHTTPMethod
    force lower camelCase: aPoorlyNamedHTTPMethod
    force lower camelCase (2): xmlHTTPACL
    snake_case identifier -> CamelCase: XMLThing
    ");
}
