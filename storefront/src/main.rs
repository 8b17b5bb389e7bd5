//! Browser entry point. Build with `trunk serve`.

fn main() {
    ecofinds_storefront::run();
}
