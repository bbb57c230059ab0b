use crate::dates::daily_seed;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

const fn quote(text: &'static str, author: &'static str) -> Quote {
    Quote { text, author }
}

pub const QUOTES: &[Quote] = &[
    quote("A felicidade da sua vida depende da qualidade dos seus pensamentos.", "Marco Aurélio"),
    quote("Não estrague o que você tem desejando o que não tem.", "Epicuro"),
    quote("Aquele que tem um 'porquê' para viver pode suportar quase qualquer 'como'.", "Nietzsche"),
    quote("A melhor maneira de prever o futuro é criá-lo.", "Peter Drucker"),
    quote("Aja como se o que você faz fizesse diferença. Faz.", "William James"),
    quote("No meio da dificuldade encontra-se a oportunidade.", "Albert Einstein"),
    quote("O homem que remove uma montanha começa carregando pequenas pedras.", "Provérbio Chinês"),
    quote("A vida é 10% o que acontece comigo e 90% de como eu reajo a isso.", "Charles Swindoll"),
    quote("A simplicidade é o último grau de sofisticação.", "Leonardo da Vinci"),
    quote("O que não nos mata nos torna mais fortes.", "Nietzsche"),
    quote("A disciplina é a ponte entre metas e realizações.", "Jim Rohn"),
    quote("Foco é dizer não para centenas de boas ideias.", "Steve Jobs"),
    quote("Sem autodisciplina, o sucesso é impossível, ponto final.", "Lou Holtz"),
    quote("A única diferença entre sucesso e fracasso é a capacidade de agir.", "Alexander Graham Bell"),
    quote("Você nunca vai sempre estar motivado. Você tem que aprender a ser disciplinado.", "Desconhecido"),
    quote("Foco, disciplina, trabalho árduo e sacrifício. Finalmente, não existe mágica.", "Kobe Bryant"),
    quote("A força não vem de vitórias. Seus esforços desenvolvem suas forças.", "Arnold Schwarzenegger"),
    quote("Persistência é o veículo do êxito.", "Charles Chaplin"),
    quote("Disciplina é lembrar-se do que você quer.", "David Campbell"),
    quote("Foco é fazer o que é preciso, disciplina é evitar o que não é necessário.", "Desconhecido"),
    quote("A disciplina é a parte mais importante do sucesso.", "Truman Capote"),
    quote("Não é o que fazemos de vez em quando que molda nossas vidas, mas o que fazemos consistentemente.", "Tony Robbins"),
    quote("Para ter sucesso, sua determinação deve ser maior que sua habilidade de desistir.", "Desconhecido"),
    quote("A verdadeira liberdade é impossível sem uma mente liberta pela disciplina.", "Mortimer J. Adler"),
    quote("Disciplina é a escolha entre o que você quer agora e o que você quer mais.", "Desconhecido"),
    quote("A excelência não é um ato, mas um hábito.", "Aristóteles"),
    quote("Sucesso é a soma de pequenos esforços repetidos dia após dia.", "Robert Collier"),
    quote("Não é a motivação que te faz continuar, é a disciplina.", "Desconhecido"),
    quote("Os resultados vêm para aqueles que têm paciência e perseverança.", "Desconhecido"),
    quote("Disciplina é fazer o que deve ser feito, mesmo quando você não quer.", "Desconhecido"),
    quote("O futuro é moldado pelas decisões que você faz hoje.", "Desconhecido"),
    quote("Cada pequeno esforço disciplinado constrói uma grande vitória.", "Desconhecido"),
    quote("Disciplina não é sobre perfeição, é sobre consistência.", "Desconhecido"),
    quote("Sem disciplina, o talento é apenas potencial desperdiçado.", "Desconhecido"),
    quote("Não espere por motivação; ela é passageira. A disciplina é constante.", "Desconhecido"),
    quote("A excelência não é um destino, é uma rotina construída com disciplina.", "Desconhecido"),
    quote("Tudo posso naquele que me fortalece.", "Filipenses 4:13"),
    quote("Sê forte e corajoso; não temas, nem te espantes.", "Josué 1:9"),
    quote("O Senhor é a minha força e o meu escudo.", "Salmos 28:7"),
    quote("Confia no Senhor de todo o teu coração e não te estribes no teu próprio entendimento.", "Provérbios 3:5"),
];

/// The quote shown for a given calendar day; stable all day, rolls over at
/// local midnight.
pub fn quote_for(date: NaiveDate) -> Quote {
    QUOTES[daily_seed(date) as usize % QUOTES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_is_stable_for_a_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(quote_for(date), quote_for(date));
    }

    #[test]
    fn quote_indexes_by_seed_modulo_len() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let expected = QUOTES[daily_seed(date) as usize % QUOTES.len()];
        assert_eq!(quote_for(date), expected);
    }

    #[test]
    fn consecutive_days_eventually_differ() {
        let base = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let first = quote_for(base);
        let changed = (1..10)
            .map(|offset| quote_for(base + chrono::Duration::days(offset)))
            .any(|q| q != first);
        assert!(changed);
    }
}
