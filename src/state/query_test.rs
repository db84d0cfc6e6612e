use super::*;

#[test]
fn unknown_keys_start_at_epoch_zero() {
    let client = QueryClient::default();
    assert_eq!(client.epoch(keys::API_KEYS), 0);
    assert_eq!(client.epoch("never-seen"), 0);
}

#[test]
fn invalidate_bumps_only_the_named_key() {
    let mut client = QueryClient::default();
    client.invalidate(keys::WIDGETS);
    client.invalidate(keys::WIDGETS);
    assert_eq!(client.epoch(keys::WIDGETS), 2);
    assert_eq!(client.epoch(keys::FLOWS), 0);
}

#[test]
fn epochs_are_monotonic() {
    let mut client = QueryClient::default();
    let mut last = client.epoch(keys::CALLS);
    for _ in 0..5 {
        client.invalidate(keys::CALLS);
        let next = client.epoch(keys::CALLS);
        assert!(next > last);
        last = next;
    }
}
