use tera::Tera;

static BASE_HTML: &str = include_str!("web/base.html");
static HOME_HTML: &str = include_str!("web/home.html");
static BOOKING_FORM_HTML: &str = include_str!("web/booking_form.html");
static BOOKING_LIST_HTML: &str = include_str!("web/booking_list.html");

/// Page templates, compiled into the binary.
pub fn load() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", BASE_HTML),
        ("home.html", HOME_HTML),
        ("booking_form.html", BOOKING_FORM_HTML),
        ("booking_list.html", BOOKING_LIST_HTML),
    ])?;
    Ok(tera)
}
