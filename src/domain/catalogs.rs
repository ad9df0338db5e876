//! Descriptor catalogs mapping copy configuration codes to instruction text.
//!
//! Codes are normalized (trimmed, lowercased) before lookup. Unknown codes
//! pass through unchanged so free-text values typed by users reach the model
//! as-is instead of erroring.

/// Instruction paragraph for a copy type code.
pub fn copy_type_instruction(code: &str) -> String {
    lookup(code, copy_type_entry)
}

/// Instruction paragraph for a rhetorical framework code.
pub fn framework_instruction(code: &str) -> String {
    lookup(code, framework_entry)
}

/// Instruction paragraph for an objective code.
pub fn objective_instruction(code: &str) -> String {
    lookup(code, objective_entry)
}

/// Instruction paragraph for a style tag. Tags are combinable; callers join
/// several of these in one section.
pub fn style_instruction(code: &str) -> String {
    lookup(code, style_entry)
}

/// Instruction paragraph for an emotional focus code.
pub fn emotional_focus_instruction(code: &str) -> String {
    lookup(code, emotional_focus_entry)
}

fn lookup(code: &str, entry: fn(&str) -> Option<&'static str>) -> String {
    match entry(code.trim().to_lowercase().as_str()) {
        Some(text) => text.to_string(),
        None => code.to_string(),
    }
}

fn copy_type_entry(code: &str) -> Option<&'static str> {
    match code {
        "landing_page" => Some(
            "Escreva uma landing page completa de alta conversão. Estruture a página em blocos: \
             promessa principal no topo, prova e autoridade no meio, oferta e chamada para ação \
             no final. Cada bloco sustenta uma única ideia central e conduz o leitor ao próximo \
             sem atrito. Use títulos escaneáveis e frases curtas.",
        ),
        "anuncio" => Some(
            "Escreva um anúncio curto para tráfego pago. Os três primeiros segundos decidem tudo: \
             abra com um gancho que interrompa a rolagem do público certo e afaste o público \
             errado. Desenvolva uma única promessa, sustente com uma prova rápida e feche com uma \
             chamada para ação direta. Corte qualquer palavra que não pague o próprio espaço.",
        ),
        "vsl" => Some(
            "Escreva o roteiro de uma VSL (video sales letter). Prenda a atenção nos primeiros \
             segundos com o lead, construa a narrativa do problema ao mecanismo da solução e só \
             então revele a oferta. Escreva para ser falado: frases curtas, ritmo crescente e \
             transições que impeçam o espectador de sair antes do pitch.",
        ),
        "email" => Some(
            "Escreva um e-mail de marketing. O assunto existe para gerar a abertura e a primeira \
             linha existe para sustentar o assunto; trate os dois como a parte mais importante do \
             texto. Escreva como uma pessoa escreve para outra, com um único objetivo por e-mail \
             e uma única chamada para ação clara ao final.",
        ),
        "webinario" => Some(
            "Escreva o conteúdo de um webinário de vendas. Organize em três atos: conteúdo que \
             gera valor real e constrói autoridade, virada que conecta o conteúdo ao problema que \
             a oferta resolve, e pitch com transição natural. Prometa no início o que será \
             entregue no final para segurar a audiência até a oferta.",
        ),
        "conteudo" => Some(
            "Escreva um conteúdo editorial (artigo ou post de blog). Entregue valor genuíno sobre \
             o tema antes de qualquer menção comercial. Estruture com subtítulos claros, exemplos \
             concretos e uma conclusão que aponte o próximo passo natural do leitor. O objetivo é \
             construir confiança e autoridade, não vender diretamente.",
        ),
        "mensagem_direta" => Some(
            "Escreva uma mensagem direta (WhatsApp, DM ou SMS). Seja curto, pessoal e contextual: \
             a mensagem deve parecer escrita para aquela pessoa, não disparada em massa. Abra com \
             o motivo do contato, entregue o ponto em poucas linhas e feche com uma pergunta ou \
             chamada simples que facilite a resposta.",
        ),
        "outro" => Some(
            "Escreva a copy no formato solicitado pelo usuário. Aplique os fundamentos de \
             copywriting de resposta direta: uma ideia central, promessa clara, prova que a \
             sustente e chamada para ação específica. Adapte tom e extensão ao canal indicado no \
             contexto.",
        ),
        _ => None,
    }
}

fn framework_entry(code: &str) -> Option<&'static str> {
    match code {
        "aida" => Some(
            "Estruture a copy com AIDA. Atenção: abra com um gancho impossível de ignorar para o \
             público definido. Interesse: desenvolva o gancho com fatos, história ou tensão que \
             mantenham a leitura. Desejo: transforme interesse em vontade concreta, tornando a \
             transformação palpável. Ação: feche com uma chamada única, específica e urgente.",
        ),
        "pas" => Some(
            "Estruture a copy com PAS. Problema: nomeie o problema real do leitor com as palavras \
             que ele próprio usaria. Agitação: aprofunde as consequências de não resolver, \
             tornando o custo da inação visível. Solução: apresente a oferta como o caminho \
             natural de saída, conectando cada dor agitada a um alívio específico.",
        ),
        "fab" => Some(
            "Estruture a copy com FAB. Features: apresente as características concretas do \
             produto ou serviço. Advantages: traduza cada característica na vantagem que ela \
             gera. Benefits: converta cada vantagem no benefício final para a vida do leitor. \
             Nunca deixe uma característica sem o benefício correspondente; o leitor compra o \
             resultado, não a ferramenta.",
        ),
        "pppp" => Some(
            "Estruture a copy com os 4 Ps. Picture: abra pintando a imagem do cenário desejado ou \
             do problema vivido. Promise: faça a promessa central que conecta essa imagem à \
             oferta. Prove: sustente a promessa com números, depoimentos ou demonstração. Push: \
             empurre para a ação com urgência legítima e instrução clara do próximo passo.",
        ),
        "quest" => Some(
            "Estruture a copy com QUEST. Qualify: qualifique o leitor logo no início, deixando \
             claro para quem é o texto. Understand: demonstre que entende a situação dele antes \
             de propor qualquer coisa. Educate: eduque sobre o problema e o mecanismo da solução. \
             Stimulate: desperte o desejo pela transformação. Transition: conduza a passagem \
             natural de leitor para comprador.",
        ),
        "bab" => Some(
            "Estruture a copy com Before-After-Bridge. Before: descreva a situação atual do \
             leitor com precisão, incluindo as frustrações que ele reconhece. After: mostre o \
             cenário depois da transformação, específico e crível. Bridge: apresente a oferta \
             como a ponte entre os dois cenários, explicando por que ela atravessa exatamente \
             essa distância.",
        ),
        "pastor" => Some(
            "Estruture a copy com PASTOR. Problem: exponha o problema central. Amplify: \
             amplifique o custo de conviver com ele. Story: conte a história de quem atravessou \
             esse problema. Transformation: mostre a transformação alcançada, com testemunho \
             quando houver. Offer: detalhe a oferta e o que ela inclui. Response: peça a resposta \
             com uma chamada para ação inequívoca.",
        ),
        _ => None,
    }
}

fn objective_entry(code: &str) -> Option<&'static str> {
    match code {
        "venda_direta" => Some(
            "O objetivo desta copy é venda direta. Conduza o leitor até a compra nesta própria \
             peça: promessa clara, oferta explícita com preço ou condição quando disponível, \
             tratamento das objeções principais e chamada para ação de compra. Urgência e \
             escassez só quando forem reais e verificáveis.",
        ),
        "geracao_leads" => Some(
            "O objetivo desta copy é geração de leads. Troque valor por contato: deixe óbvio o \
             que a pessoa recebe ao se cadastrar e por que isso vale o e-mail ou telefone dela. \
             Reduza o atrito ao mínimo, peça apenas os dados necessários e elimine qualquer \
             linguagem de venda pesada que espante o cadastro.",
        ),
        "engajamento" => Some(
            "O objetivo desta copy é engajamento e compartilhamento. Escreva para provocar \
             reação: uma opinião clara, uma pergunta que convida resposta ou uma história na \
             qual o público se reconhece. Termine abrindo conversa em vez de fechá-la, e dê ao \
             leitor um motivo concreto para comentar ou compartilhar.",
        ),
        "educacao" => Some(
            "O objetivo desta copy é educar a audiência. Ensine algo aplicável de verdade, em \
             linguagem acessível, com exemplos e passos concretos. A venda aqui é indireta: a \
             autoridade construída pelo ensino é o ativo. Referencie a solução apenas onde ela \
             for a continuação natural do aprendizado.",
        ),
        "retencao" => Some(
            "O objetivo desta copy é retenção de clientes atuais. Fale com quem já comprou: \
             reforce a decisão tomada, mostre caminhos para extrair mais valor do que já foi \
             adquirido e antecipe motivos de cancelamento antes que virem decisão. O tom é de \
             relacionamento, não de aquisição.",
        ),
        "upsell_cross_sell" => Some(
            "O objetivo desta copy é upsell ou cross-sell. Parta do que o cliente já possui e \
             mostre o ganho incremental da próxima compra: o que destrava, o que acelera, o que \
             completa. Ancore no resultado que ele já obteve e trate a nova oferta como o passo \
             seguinte lógico, não como uma venda do zero.",
        ),
        "reativacao" => Some(
            "O objetivo desta copy é reativação de contatos frios ou clientes inativos. \
             Reconheça o tempo de silêncio sem drama, reapresente o valor com o que mudou desde \
             então e dê um motivo concreto para voltar agora: condição especial, novidade \
             relevante ou conteúdo de alto valor. Facilite o retorno com um único passo simples.",
        ),
        _ => None,
    }
}

fn style_entry(code: &str) -> Option<&'static str> {
    match code {
        "storytelling" => Some(
            "Use storytelling como espinha dorsal da copy. Construa uma narrativa com \
             personagem, conflito e resolução em que o público se reconheça. A história carrega \
             a mensagem de venda por dentro: cada cena deve aproximar o leitor da conclusão \
             comercial sem quebrar a imersão. Detalhes sensoriais e específicos valem mais que \
             adjetivos.",
        ),
        "polemico" => Some(
            "Adote um tom polêmico e disruptivo. Desafie uma crença estabelecida do mercado com \
             uma posição clara e defensável, sustentada por argumento ou evidência; provocação \
             sem fundamento vira ruído. Aceite dividir opiniões: o texto deve fortalecer a \
             conexão com o público certo mesmo que afaste o restante.",
        ),
        "aspiracional" => Some(
            "Adote um tom aspiracional e sofisticado. Venda o pertencimento a um padrão mais \
             alto: vocabulário elegante, ritmo calmo e zero desespero comercial. Escassez aqui é \
             exclusividade, não contagem regressiva. O leitor deve sentir que está sendo \
             convidado, não convencido.",
        ),
        "urgente" => Some(
            "Adote um tom de urgência. Deixe claro o custo de adiar a decisão e o que se perde a \
             cada dia sem a solução. Prazos, vagas e condições devem ser concretos e \
             verdadeiros; urgência fabricada destrói a confiança que o resto da copy construiu. \
             Frases curtas, verbos no imperativo, ritmo acelerado.",
        ),
        "dados" => Some(
            "Adote um tom analítico orientado a dados. Sustente cada afirmação relevante com \
             número, fonte ou caso mensurável, e prefira o específico ao redondo: 37% convence \
             mais que \"muitos\". Apresente a lógica do argumento de forma transparente para um \
             leitor cético que vai verificar o que puder.",
        ),
        "conversacional" => Some(
            "Adote um tom conversacional. Escreva como quem fala com um amigo: frases curtas, \
             vocabulário cotidiano, perguntas diretas ao leitor e transições naturais. Leia em \
             voz alta mentalmente; o que soar como texto de empresa deve ser reescrito como \
             gente.",
        ),
        "mistico" => Some(
            "Adote um tom místico e espiritual. Trabalhe com sentido, propósito e transformação \
             interior, usando imagens e metáforas do universo simbólico do público. Respeite a \
             seriedade dessas referências para a audiência: profundidade genuína conecta, \
             caricatura afasta. A oferta aparece como parte de uma jornada, não como transação.",
        ),
        _ => None,
    }
}

fn emotional_focus_entry(code: &str) -> Option<&'static str> {
    match code {
        "dor" => Some(
            "O foco emocional da copy é a dor. Nomeie com precisão o incômodo que o público \
             sente hoje, usando as palavras dele, e mostre que essa dor tem causa e tem saída. \
             Pressione o suficiente para gerar movimento, sem humilhar o leitor nem transformar \
             o texto em catálogo de sofrimento.",
        ),
        "desejo" => Some(
            "O foco emocional da copy é o desejo. Amplifique a vontade que já existe: descreva \
             em detalhe concreto o cenário desejado, o que muda na rotina, no status e na \
             autoimagem de quem alcança. O leitor deve terminar o texto querendo com mais \
             intensidade o que já queria ao começar.",
        ),
        "transformacao" => Some(
            "O foco emocional da copy é a transformação. Estruture o contraste entre o antes e o \
             depois, tornando a distância entre os dois estados visível e a travessia crível. A \
             oferta é o veículo da mudança; a estrela da narrativa é a pessoa transformada.",
        ),
        "prevencao" => Some(
            "O foco emocional da copy é a prevenção. Mostre o risco de não agir enquanto ele \
             ainda é administrável: o que hoje é um incômodo pequeno e o que ele se torna se \
             nada mudar. Posicione a oferta como proteção inteligente, decisão de quem age antes \
             do problema crescer.",
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_copy_type_returns_instruction() {
        let text = copy_type_instruction("email");
        assert!(text.contains("e-mail de marketing"));
        assert!(text.len() > 100);
    }

    #[test]
    fn unknown_code_passes_through_unchanged() {
        assert_eq!(copy_type_instruction("xyz_custom"), "xyz_custom");
        assert_eq!(style_instruction("meu_estilo_proprio"), "meu_estilo_proprio");
    }

    #[test]
    fn lookup_is_case_insensitive_and_trimmed() {
        assert_eq!(copy_type_instruction("  EMAIL "), copy_type_instruction("email"));
        assert_eq!(framework_instruction("AIDA"), framework_instruction("aida"));
    }

    #[test]
    fn all_primary_codes_resolve() {
        let copy_types = [
            "landing_page",
            "anuncio",
            "vsl",
            "email",
            "webinario",
            "conteudo",
            "mensagem_direta",
            "outro",
        ];
        for code in copy_types {
            assert_ne!(copy_type_instruction(code), code, "missing copy type entry: {code}");
        }

        let frameworks = ["aida", "pas", "fab", "pppp", "quest", "bab", "pastor"];
        for code in frameworks {
            assert_ne!(framework_instruction(code), code, "missing framework entry: {code}");
        }

        let objectives = [
            "venda_direta",
            "geracao_leads",
            "engajamento",
            "educacao",
            "retencao",
            "upsell_cross_sell",
            "reativacao",
        ];
        for code in objectives {
            assert_ne!(objective_instruction(code), code, "missing objective entry: {code}");
        }

        let styles = [
            "storytelling",
            "polemico",
            "aspiracional",
            "urgente",
            "dados",
            "conversacional",
            "mistico",
        ];
        for code in styles {
            assert_ne!(style_instruction(code), code, "missing style entry: {code}");
        }

        for code in ["dor", "desejo", "transformacao", "prevencao"] {
            assert_ne!(emotional_focus_instruction(code), code, "missing focus entry: {code}");
        }
    }
}
