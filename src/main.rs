fn main() {
    console_error_panic_hook::set_once();
    spendle_web::start();
}
