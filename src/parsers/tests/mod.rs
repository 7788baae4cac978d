
/// Build a listing page the way the marketplace lays it out
pub(crate) fn listing_html(links: &[&str], next_page: Option<&str>) -> String {
    let items: String = links
        .iter()
        .map(|link| {
            format!(
                "<li class=\"ui-search-layout__item\">\n\
                 <div class=\"ui-search-result\">\n\
                 <a class=\"ui-search-item__group__element ui-search-link\" href=\"{link}\">Offer</a>\n\
                 </div>\n\
                 </li>\n"
            )
        })
        .collect();

    let pagination = next_page
        .map(|href| {
            format!(
                "<ul class=\"andes-pagination\"><li><a class=\"andes-pagination__link ui-search-link\" href=\"{href}\">Siguiente</a></li></ul>"
            )
        })
        .unwrap_or_default();

    format!(
        "<html><body><section>\n\
         <ol class=\"ui-search-layout ui-search-layout--stack\">\n{items}</ol>\n\
         {pagination}\n\
         </section></body></html>"
    )
}

/// Build a detail page with a price and a seller profile link
pub(crate) fn detail_html(price: &str, vendor_href: &str) -> String {
    format!(
        "<html><body>\n\
         <div class=\"ui-pdp-price\"><span class=\"andes-money-amount__fraction\">{price}</span></div>\n\
         <a class=\"ui-pdp-media__action\" href=\"{vendor_href}\">Ver más datos de este vendedor</a>\n\
         </body></html>"
    )
}
