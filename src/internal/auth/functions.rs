pub(crate) mod extract_nonce;
