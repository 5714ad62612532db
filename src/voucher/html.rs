use crate::voucher::render::{SectionBody, VoucherLayout};
use html_escape::encode_text;
use std::fmt::Write;

/// Id of the element placed after all voucher content; its presence means
/// the layout, contact code included, is fully in the DOM.
pub const READY_MARKER_ID: &str = "voucher-ready";

const STYLE: &str = "\
body { font-family: Arial, Helvetica, sans-serif; color: #222; margin: 0; }
#voucher-layout { width: 720px; margin: 0 auto; padding: 32px; }
h1 { font-size: 22px; border-bottom: 2px solid #0a5; padding-bottom: 8px; }
h3 { font-size: 16px; margin: 18px 0 6px; }
table { width: 100%; border-collapse: collapse; }
th { background: #f0f0f0; text-align: left; }
th, td { border: 1px solid #ccc; padding: 5px; }
p { margin: 4px 0; }
.footer { display: flex; justify-content: space-between; align-items: flex-end; margin-top: 24px; }
.contact svg { width: 90px; height: 90px; }
";

/// Standalone HTML document for a voucher layout
pub fn to_html(layout: &VoucherLayout) -> String {
    let mut out = String::with_capacity(4096);
    // writing into a String cannot fail
    let _ = write_document(&mut out, layout);
    out
}

fn write_document(out: &mut String, layout: &VoucherLayout) -> std::fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"{}\">", layout.language.code())?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>{}</title>", encode_text(&layout.title))?;
    writeln!(out, "<style>{STYLE}</style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<div id=\"voucher-layout\">")?;
    writeln!(out, "<h1>{}</h1>", encode_text(&layout.title))?;

    for section in &layout.sections {
        writeln!(out, "<section>")?;
        writeln!(out, "<h3>{}</h3>", encode_text(&section.heading))?;
        match &section.body {
            SectionBody::Table { columns, rows } => {
                writeln!(out, "<table>")?;
                write!(out, "<thead><tr>")?;
                for column in columns {
                    write!(out, "<th>{}</th>", encode_text(column))?;
                }
                writeln!(out, "</tr></thead>")?;
                writeln!(out, "<tbody>")?;
                for row in rows {
                    write!(out, "<tr>")?;
                    for cell in row {
                        write!(out, "<td>{}</td>", encode_text(cell))?;
                    }
                    writeln!(out, "</tr>")?;
                }
                writeln!(out, "</tbody>")?;
                writeln!(out, "</table>")?;
            }
            SectionBody::Fields(fields) => {
                for field in fields {
                    writeln!(
                        out,
                        "<p><strong>{}:</strong> {}</p>",
                        encode_text(&field.label),
                        encode_text(&field.value)
                    )?;
                }
            }
        }
        writeln!(out, "</section>")?;
    }

    writeln!(out, "<div class=\"footer\">")?;
    writeln!(
        out,
        "<p class=\"issued\"><strong>{}:</strong> <span id=\"issued-at\">{}</span></p>",
        encode_text(&layout.issued.label),
        encode_text(&layout.issued.value)
    )?;
    if let Some(contact) = &layout.contact {
        writeln!(out, "<div class=\"contact\" id=\"contact-code\">")?;
        writeln!(out, "<p><strong>{}</strong></p>", encode_text(&contact.label))?;
        writeln!(out, "{}", contact.code.svg())?;
        writeln!(out, "</div>")?;
    }
    writeln!(out, "</div>")?;

    writeln!(out, "</div>")?;
    writeln!(out, "<div id=\"{READY_MARKER_ID}\"></div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FormState, Language};
    use crate::voucher::{render, ContactCode, VoucherBuilder};
    use scraper::{Html, Selector};

    fn document(form: &FormState, contact: Option<&ContactCode>) -> Html {
        let record = VoucherBuilder::build(form).unwrap();
        let layout = render(&record, record.language(), contact);
        Html::parse_document(&to_html(&layout))
    }

    fn texts(doc: &Html, selector: &str) -> Vec<String> {
        let selector = Selector::parse(selector).unwrap();
        doc.select(&selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect()
    }

    fn form() -> FormState {
        FormState {
            passengers: vec!["João Silva".to_string(), "Ana <Lima>".to_string()],
            outbound: "GRU".to_string(),
            outbound_at: "2024-05-01T10:00".to_string(),
            amount: "150.00".to_string(),
            ..FormState::default()
        }
    }

    #[test]
    fn passenger_table_and_sections() {
        let doc = document(&form(), None);

        assert_eq!(texts(&doc, "th"), vec!["Nome"]);
        assert_eq!(texts(&doc, "tbody td"), vec!["JOÃO SILVA", "ANA <LIMA>"]);
        assert_eq!(
            texts(&doc, "h3"),
            vec!["Passageiros", "Dados da Viagem", "Pagamento"]
        );
        assert!(texts(&doc, "p").contains(&"Valor Total: R$ 150,00".to_string()));
        assert_eq!(texts(&doc, &format!("#{READY_MARKER_ID}")).len(), 1);
        assert!(texts(&doc, "#contact-code").is_empty());
    }

    #[test]
    fn english_document() {
        let mut form = form();
        form.language = Language::En.code().to_string();
        let doc = document(&form, None);

        assert_eq!(texts(&doc, "th"), vec!["Name"]);
        assert_eq!(texts(&doc, "h3")[0], "Passengers");
        assert!(texts(&doc, "p").contains(&"Departure: GRU".to_string()));
    }

    #[test]
    fn contact_code_is_inlined_before_marker() {
        let code = ContactCode::new("https://example.com/contact").unwrap();
        let record = VoucherBuilder::build(&form()).unwrap();
        let html = to_html(&render(&record, Language::Pt, Some(&code)));

        let svg_at = html.find("<svg").unwrap();
        let marker_at = html.find(READY_MARKER_ID).unwrap();
        assert!(svg_at < marker_at);
        assert!(!html.contains("<?xml"));
    }

    #[test]
    fn escapes_markup_in_values() {
        let mut form = form();
        form.hotel = "Tom & Jerry <Inn>".to_string();
        let record = VoucherBuilder::build(&form).unwrap();
        let html = to_html(&render(&record, Language::Pt, None));

        assert!(html.contains("<td>ANA &lt;LIMA&gt;</td>"));
        assert!(html.contains("Tom &amp; Jerry &lt;Inn&gt;"));
        assert!(!html.contains("<Inn>"));
    }
}
