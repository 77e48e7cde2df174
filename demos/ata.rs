use ata_pdf::{Exporter, Style};
use serde_json::json;

fn main() {
    // the meeting itself; Portuguese and English keys are both understood
    let record = json!({
        "tipo": "sacramental",
        "data": "07/01/2024",
        "ala_nome": "Ala Jardim Botânico",
        "status": "Completa",
    });

    // what happened in the meeting; anything left out is simply not drawn
    let details = json!({
        "tema": "Gratidão",
        "presidido_por": "Bispo Alves",
        "dirigido_por": "Irmão Costa",
        "recepcionistas": ["Irmão Lima", "Irmã Souza"],
        "anuncios": ["Conferência de estaca no dia 21", "Limpeza da capela no sábado"],
        "hino_abertura": "2 - Tal Como um Facho",
        "oracao_abertura": "Irmã Pereira",
        "apoios": ["Irmã Souza como professora da Primária"],
        "hino_sacramental": "193 - Eu Sei Que Vive Meu Senhor",
        "discursantes": ["Irmão Lima", "Irmã Costa"],
        "ultimo_discursante": "Bispo Alves",
        "hino_encerramento": "85 - Deus Vos Guarde",
        "oracao_encerramento": "Irmão Santos",
    });

    // boilerplate read out loud, with [NOME], [DATA] and [TEMA] filled in
    let template = json!({
        "boas_vindas": "Sejam bem-vindos à reunião sacramental da [NOME] neste dia [DATA].",
        "apoios": "Os que puderem apoiar, manifestem-se levantando a mão direita.",
        "sacramento": "Passaremos agora à ordenança do sacramento.",
        "mensagens": "Ouviremos agora as mensagens sobre o tema [TEMA].",
        "encerramento": "Agradecemos a presença de todos.",
    });

    // the default font is the best one found on this machine
    let exporter = Exporter::default().with_style(Style::standard());
    let artifact = exporter
        .export_sacramental(&record, Some(&details), Some(&template), None)
        .expect("can render the ata");

    // save the document next to where we ran from
    std::fs::write(&artifact.filename, &artifact.bytes).expect("can write the pdf");
    println!("wrote {} ({} bytes)", artifact.filename, artifact.bytes.len());
}
