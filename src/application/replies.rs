//! User-facing reply texts (pt-BR). Nothing here exposes error internals.

use crate::domain::entities::commodity::Commodity;
use crate::domain::error::{DomainError, NotFound};

pub fn help_text() -> String {
    "Você pode digitar:\n\
     /listar - lista todos os contratos BM&F\n\
     /ajuste CODIGOVENCIMENTO - para obter o valor do ajuste."
        .to_string()
}

pub fn usage_text() -> String {
    "/ajuste CODIGOVENCIMENTO - para obter o valor do ajuste.\n\
     exemplo: /ajuste DOLN20 (Dolar vencimento 01/07/2020)"
        .to_string()
}

pub fn names_reply(names: &[String]) -> String {
    if names.is_empty() {
        return "Nenhum contrato disponível no momento.".to_string();
    }
    names.join("\n")
}

pub fn commodity_reply(commodity: &Commodity) -> String {
    format!(
        "Mercadoria: {}\n\
         Vencimento: {}\n\
         Preço de ajuste anterior: {}\n\
         Preço de ajuste Atual: {}\n\
         Variação: {}\n\
         Valor do ajuste por contrato (R$): {}",
        commodity.name,
        commodity.due_date,
        commodity.previous_adjustment_price,
        commodity.current_adjustment_price,
        commodity.variation,
        commodity.contract_adjustment_amount,
    )
}

pub fn error_reply(err: &DomainError) -> String {
    match err {
        DomainError::Fetch(_) => "Não foi possível consultar os ajustes na B3 agora. \
                                  Tente novamente em alguns minutos."
            .to_string(),
        DomainError::Parse(_) => "A tabela de ajustes da B3 veio em um formato inesperado. \
                                  Tente novamente mais tarde."
            .to_string(),
        DomainError::InvalidCode(_) => format!("Código inválido.\n{}", usage_text()),
        DomainError::NotFound(NotFound::Contract { acronym, due_date }) => format!(
            "Não foi encontrado contrato com o código: {acronym} e vencimento {due_date}"
        ),
        DomainError::NotFound(NotFound::SpotMarket { code }) => {
            let futures = code.strip_suffix('D').unwrap_or(code);
            format!(
                "{code} é mercadoria Disponível. \
                 Os contratos futuros são {futures} + código do vencimento"
            )
        }
    }
}
