use super::*;

#[test]
fn probe_summary_formats_status_and_request_id() {
    let reply = ProbeReply {
        request_id: "r-42".to_owned(),
        status: "ok".to_owned(),
    };
    assert_eq!(probe_summary(&reply), "ok (request r-42)");
}

#[test]
fn probe_summary_passes_service_status_through_verbatim() {
    let reply = ProbeReply {
        request_id: "r-1".to_owned(),
        status: "degraded".to_owned(),
    };
    assert_eq!(probe_summary(&reply), "degraded (request r-1)");
}
