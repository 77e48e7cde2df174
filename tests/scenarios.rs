use ata_pdf::{
    BuiltinFont, Exporter, FontSource, Layout, Page, Section, Style, PDF_MIME_TYPE,
    SACRAMENTAL_FILENAME,
};
use serde_json::{json, Value};

fn exporter() -> Exporter {
    Exporter::default().with_font(FontSource::Builtin(BuiltinFont::Helvetica))
}

fn sacramental() -> Value {
    json!({"type": "sacramental", "date": "2024-01-07"})
}

fn layout(record: &Value, details: Option<&Value>, template: Option<&Value>) -> Layout {
    exporter()
        .layout(record, details, template)
        .expect("can lay out")
}

fn texts(page: &Page) -> Vec<&str> {
    page.spans().map(|span| span.text.as_str()).collect()
}

fn all_texts(layout: &Layout) -> Vec<&str> {
    layout.document.ordered_pages().flat_map(texts).collect()
}

#[test]
fn empty_details_fit_on_one_page() {
    let layout = layout(&sacramental(), Some(&json!({})), None);

    assert_eq!(layout.document.page_count(), 1);
    let texts = all_texts(&layout);
    assert!(texts[0].starts_with("Ata Sacramental"));
    assert!(!texts.iter().any(|t| t.starts_with("TEMA")));
    assert!(!texts.contains(&"AÇÕES"));
    assert!(!layout.sections.contains(&Section::Theme));
    assert!(!layout.sections.contains(&Section::Actions));
}

#[test]
fn actions_section_is_omitted_without_content() {
    let layout = layout(&sacramental(), Some(&json!({})), None);

    assert_eq!(
        layout.sections,
        vec![
            Section::Header,
            Section::Welcome,
            Section::Opening,
            Section::Sacrament,
            Section::Messages,
            Section::Closing,
        ]
    );
    let texts = all_texts(&layout);
    for title in ["BOAS VINDAS", "ABERTURA", "SACRAMENTO", "MENSAGENS", "ENCERRAMENTO"] {
        assert!(texts.contains(&title), "missing title {title}");
    }
}

#[test]
fn announcements_are_listed_in_order() {
    let layout = layout(
        &sacramental(),
        Some(&json!({"anuncios": ["Item A", "Item B"]})),
        None,
    );

    let page = layout.document.ordered_pages().next().expect("has a page");
    let spans: Vec<_> = page.spans().collect();
    let start = spans
        .iter()
        .position(|span| span.text == "Anúncios:")
        .expect("announcements are drawn");
    assert_eq!(spans[start + 1].text, "Item A");
    assert_eq!(spans[start + 2].text, "Item B");
    assert!(spans[start + 1].coords.1 > spans[start + 2].coords.1);

    let opening = spans
        .iter()
        .position(|span| span.text == "ABERTURA")
        .expect("opening title is drawn");
    assert!(opening < start);
}

#[test]
fn actions_with_guidance_and_entries() {
    let template = json!({
        "apoios": "Os que forem a favor de apoiar [NOME], manifestem-se.",
    });
    let details = json!({"apoios": ["Irmã Souza como professora"]});
    let record = json!({"type": "sacramental", "alias": "Ala Centro"});
    let layout = layout(&record, Some(&details), Some(&template));

    assert!(layout.sections.contains(&Section::Actions));
    let texts = all_texts(&layout);
    let title = texts.iter().position(|t| *t == "AÇÕES").expect("actions title");
    assert!(texts[title + 1].contains("Ala Centro"));
    assert!(texts.contains(&"Apoios:"));
    assert!(texts.contains(&"Irmã Souza como professora"));
}

#[test]
fn theme_is_drawn_after_header() {
    let layout = layout(&sacramental(), Some(&json!({"tema": "Gratidão"})), None);
    let texts = all_texts(&layout);
    let theme = texts
        .iter()
        .position(|t| *t == "TEMA: Gratidão")
        .expect("theme is drawn");
    let welcome = texts.iter().position(|t| *t == "BOAS VINDAS").expect("welcome");
    assert!(theme < welcome);
    assert_eq!(layout.sections[1], Section::Theme);
}

#[test]
fn speakers_are_numbered_and_last_is_labelled() {
    let details = json!({
        "discursantes": ["Irmão Lima", "Irmã Costa"],
        "ultimo_discursante": "Bispo Alves",
        "hino_intermediario": "Sou um Filho de Deus",
    });
    let layout = layout(&sacramental(), Some(&details), None);
    let texts = all_texts(&layout);

    let start = texts
        .iter()
        .position(|t| *t == "Discursantes:")
        .expect("speakers are drawn");
    assert_eq!(
        &texts[start + 1..start + 4],
        ["1º - Irmão Lima", "2º - Irmã Costa", "3º/Último - Bispo Alves"]
    );
    assert_eq!(texts[start + 4], "Hino Intermediário: Sou um Filho de Deus");
}

#[test]
fn overflowing_text_continues_at_top_of_next_page() {
    let long = lipsum::lipsum(3000);
    let layout = layout(&sacramental(), Some(&json!({"reconhecemos_presenca": long})), None);

    assert!(layout.document.page_count() >= 2);
    let mut pages = layout.document.ordered_pages();
    let first = pages.next().expect("first page");
    let second = pages.next().expect("second page");

    let continued = second.spans().next().expect("second page has text");
    assert_eq!(continued.coords.1, second.content_box.y2);

    // the last body line of the first page is followed by the first line of the second
    let last_on_first = first
        .spans()
        .filter(|span| span.coords.1 >= first.content_box.y1)
        .last()
        .expect("first page has text");
    let paragraph = format!("Reconhecemos a presença: {long}")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let seam = format!("{} {}", last_on_first.text, continued.text);
    assert!(paragraph.contains(&seam), "{seam:?} does not continue the paragraph");
}

#[test]
fn cursor_only_moves_down_within_a_page() {
    let long = lipsum::lipsum(2500);
    let details = json!({
        "tema": long.clone(),
        "anuncios": [long.clone(), "Curto"],
        "discursantes": [long],
    });
    let layout = layout(&sacramental(), Some(&details), None);

    for page in layout.document.ordered_pages() {
        let baselines: Vec<f32> = page
            .spans()
            .map(|span| *span.coords.1)
            .filter(|y| *y >= *page.content_box.y1)
            .collect();
        assert!(!baselines.is_empty());
        assert!(baselines.windows(2).all(|w| w[0] > w[1]), "{baselines:?}");
    }
}

#[test]
fn every_page_has_a_numbered_footer() {
    let layout = layout(
        &sacramental(),
        Some(&json!({"tema": lipsum::lipsum(3000)})),
        None,
    );
    let total = layout.document.page_count();
    assert!(total >= 2);

    for (index, page) in layout.document.ordered_pages().enumerate() {
        let texts = texts(page);
        assert!(texts.contains(&"Gerado pelo Sistema de Atas"));
        let label = format!("Página {} de {total}", index + 1);
        assert!(texts.contains(&label.as_str()), "missing {label}");
        assert_eq!(page.rules().filter(|r| r.from.1 < page.content_box.y1 * 0.8).count(), 1);
    }
}

#[test]
fn plain_text_record_draws_raw_lines() {
    let layout = layout(&json!("hello\nworld"), None, None);

    assert_eq!(layout.document.page_count(), 1);
    assert!(layout.sections.is_empty());
    assert!(layout.document.outline.is_empty());
    assert_eq!(all_texts(&layout), vec!["hello", "world"]);
}

#[test]
fn non_object_details_are_ignored() {
    let layout = layout(&sacramental(), Some(&json!(["not", "an", "object"])), None);
    assert_eq!(layout.document.page_count(), 1);
    assert!(!layout.sections.contains(&Section::Actions));
}

#[test]
fn compact_style_hides_status() {
    let standard = layout(&sacramental(), None, None);
    assert!(all_texts(&standard).contains(&"Status: Completa"));

    let compact = exporter()
        .with_style(Style::compact())
        .layout(&sacramental(), None, None)
        .expect("can lay out");
    assert!(!all_texts(&compact).iter().any(|t| t.starts_with("Status")));
}

#[test]
fn sections_are_bookmarked() {
    let layout = layout(&sacramental(), None, None);
    let titles: Vec<&str> = layout
        .document
        .outline
        .entries
        .iter()
        .map(|entry| entry.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["BOAS VINDAS", "ABERTURA", "SACRAMENTO", "MENSAGENS", "ENCERRAMENTO"]
    );
}

#[test]
fn artifacts_are_named_pdfs() {
    let exporter = exporter();
    let artifact = exporter
        .export_sacramental(&sacramental(), None, None, None)
        .expect("can export");
    assert_eq!(artifact.filename, SACRAMENTAL_FILENAME);
    assert_eq!(artifact.mime_type, PDF_MIME_TYPE);
    assert!(artifact.bytes.starts_with(b"%PDF-"));

    let named = exporter
        .export(&json!("hello"), None, None, Some("reuniao.pdf"))
        .expect("can export");
    assert_eq!(named.filename, "reuniao.pdf");
    assert!(named.bytes.starts_with(b"%PDF-"));
}

fn full_template() -> Value {
    json!({
        "boas_vindas": "Bem-vindos à [NOME].",
        "sacramento": "Prepararemos o sacramento em [DATA].",
        "mensagens": "Mensagens sobre [TEMA].",
        "encerramento": "Obrigado, [NOME].",
    })
}

fn jardim() -> Value {
    json!({"tipo": "sacramental", "data": "2024-01-07", "ala_nome": "Ala Jardim"})
}

#[test]
fn every_field_lands_in_its_section() {
    let details = json!({
        "tema": "Gratidão",
        "presidido_por": "Bispo Alves",
        "dirigido_por": "Irmão Costa",
        "recepcionistas": ["Irmão Lima", "Irmã Souza"],
        "reconhecemos_presenca": "Presidente Dias",
        "anuncios": ["Item A"],
        "hino_abertura": "2",
        "oracao_abertura": "Irmã Pereira",
        "hino_sacramental": 193,
        "discursantes": ["Irmão Lima"],
        "hino_encerramento": "85",
        "oracao_encerramento": "Irmão Santos",
    });
    let layout = layout(&jardim(), Some(&details), Some(&full_template()));

    assert_eq!(layout.document.page_count(), 1);
    assert_eq!(
        all_texts(&layout),
        vec![
            "Ata Sacramental - 2024-01-07",
            "Status: Completa",
            "TEMA: Gratidão",
            "BOAS VINDAS",
            "Bem-vindos à Ala Jardim.",
            "ABERTURA",
            "Presidida por: Bispo Alves",
            "Dirigida por: Irmão Costa",
            "Recepcionistas: Irmão Lima, Irmã Souza",
            "Reconhecemos a presença: Presidente Dias",
            "Anúncios:",
            "Item A",
            "Hino de Abertura: 2",
            "Oração de Abertura: Irmã Pereira",
            "SACRAMENTO",
            "Prepararemos o sacramento em 2024-01-07.",
            "Hino Sacramental: 193",
            "MENSAGENS",
            "Mensagens sobre Gratidão.",
            "Discursantes:",
            "1º - Irmão Lima",
            "ENCERRAMENTO",
            "Obrigado, Ala Jardim.",
            "Hino de Encerramento: 85",
            "Oração de Encerramento: Irmão Santos",
            "Gerado pelo Sistema de Atas",
            "Página 1 de 1",
        ]
    );
}

#[test]
fn template_without_details_draws_only_boilerplate() {
    let layout = layout(&jardim(), Some(&json!({})), Some(&full_template()));

    assert_eq!(
        all_texts(&layout),
        vec![
            "Ata Sacramental - 2024-01-07",
            "Status: Completa",
            "BOAS VINDAS",
            "Bem-vindos à Ala Jardim.",
            "ABERTURA",
            "SACRAMENTO",
            "Prepararemos o sacramento em 2024-01-07.",
            "MENSAGENS",
            "Mensagens sobre .",
            "ENCERRAMENTO",
            "Obrigado, Ala Jardim.",
            "Gerado pelo Sistema de Atas",
            "Página 1 de 1",
        ]
    );
}
