// ABOUTME: Motivational tip sets, five tips per set
// ABOUTME: Tips are stored without numbering; the formatter numbers them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

/// Conjuntos de dicas motivacionais
pub(super) const MOTIVATIONAL_TIPS: &[&[&str]] = &[
    &[
        "Pequenas mudanças diárias levam a grandes resultados ao longo do tempo. Comece hoje!",
        "Celebre cada vitória, por menor que seja - cada escolha saudável é um passo na direção certa.",
        "Seu corpo está mudando mesmo quando a balança não mostra - músculos pesam mais que gordura.",
        "Foque em como você se sente, não apenas nos números - mais energia e disposição são sinais de progresso.",
        "Transformar hábitos leva tempo - seja paciente e persista mesmo nos dias difíceis.",
    ],
    &[
        "A jornada de emagrecimento não é uma linha reta - aceite os altos e baixos como parte do processo.",
        "Visualize seu objetivo e lembre-se do porquê começou quando sentir vontade de desistir.",
        "Nunca subestime o poder de uma boa noite de sono para seu metabolismo e controle da fome.",
        "Cada vez que você resiste a uma tentação, seu cérebro forma novos padrões saudáveis.",
        "Não busque a perfeição, busque a consistência - 80% de aderência constante supera 100% por uma semana.",
    ],
    &[
        "Seu corpo foi feito para se mover - encontre atividades que você realmente goste de fazer.",
        "A hidratação adequada aumenta seu metabolismo em até 30% - beba água frequentemente.",
        "Planeje as refeições com antecedência para evitar escolhas impulsivas quando estiver com fome.",
        "Seu diálogo interno importa - substitua \"eu tenho que fazer dieta\" por \"eu escolho alimentar meu corpo com qualidade\".",
        "Você já superou desafios antes - use essa força para superar os obstáculos na sua jornada de emagrecimento.",
    ],
    &[
        "Seu corpo é único - compare seu progresso apenas com você mesmo, nunca com os outros.",
        "Transformar seu corpo também transforma sua mente - observe como sua confiança cresce com cada objetivo alcançado.",
        "Quando a motivação falha, a disciplina sustenta - crie rotinas que funcionem mesmo nos dias mais difíceis.",
        "Identifique seus gatilhos emocionais para comer e desenvolva estratégias saudáveis para lidar com eles.",
        "Cerque-se de pessoas que apoiam seus objetivos - o ambiente social tem enorme impacto no sucesso.",
    ],
    &[
        "Respirar profundamente por 2 minutos acalma a mente e reduz a vontade de comer por impulso.",
        "Pergunte-se: \"Isso me aproxima ou me afasta dos meus objetivos?\" antes de cada escolha alimentar.",
        "Veja os deslizes como oportunidades de aprendizado, não como falhas - o que você pode fazer diferente na próxima vez?",
        "Seu corpo é uma máquina incrível que se adapta constantemente - agradeça por tudo que ele faz por você.",
        "Foque nos hábitos, não nos resultados - os resultados virão como consequência natural dos bons hábitos.",
    ],
    &[
        "Não existe uma única forma de alcançar resultados - encontre a abordagem que funciona para sua vida e seu corpo.",
        "Desafie-se a aprender uma nova receita saudável por semana - a variedade mantém a alimentação interessante.",
        "Pequenas vitórias se acumulam - celebre cada semana consistente, cada escolha consciente.",
        "Lembre-se que o estresse constante eleva o cortisol, dificultando a perda de peso - pratique técnicas de relaxamento.",
        "Ser saudável é um estilo de vida, não uma fase temporária - concentre-se em mudanças que você possa manter para sempre.",
    ],
    &[
        "Seu peso não define seu valor - cuide da sua saúde porque você merece se sentir bem.",
        "Experimente novos sabores e texturas de alimentos saudáveis para evitar o tédio alimentar.",
        "Monitore seu progresso de formas além da balança - como roupas mais confortáveis ou mais energia.",
        "Quando sentir fome, pergunte-se se está realmente com fome ou apenas entediado, estressado ou cansado.",
        "Você não precisa ser perfeito para progredir - o importante é seguir em frente após cada obstáculo.",
    ],
    &[
        "Defina metas menores e mais frequentes para manter o impulso e a motivação elevados.",
        "Evite a mentalidade de \"tudo ou nada\" - um único alimento menos saudável não estraga todo o seu progresso.",
        "Sua mente acredita no que você repete - pratique afirmações positivas sobre sua capacidade de alcançar seus objetivos.",
        "Lembre-se que exercícios constroem músculos que queimam calorias mesmo quando você está em repouso.",
        "É normal sentir vontade de desistir - nos momentos difíceis, visualize como você se sentirá ao alcançar suas metas.",
    ],
    &[
        "Mantenha-se focado nos benefícios que vão além da estética - como melhor saúde, disposição e qualidade de vida.",
        "O progresso nem sempre é linear - plateaus são normais e temporários, mantenha a consistência.",
        "Alimente-se com consciência - saboreie cada garfada, sem distrações como celular ou televisão.",
        "Tenha um plano para ocasiões especiais - permita-se desfrutar com moderação, sem culpa ou abandono total.",
        "Cuide da sua saúde mental tanto quanto da física - o bem-estar emocional é fundamental para resultados duradouros.",
    ],
    &[
        "Deixe de lado o \"eu vou tentar\" e adote o \"eu vou fazer\" - sua linguagem molda suas ações.",
        "Lembre-se que um futuro mais saudável vale cada esforço que você faz hoje.",
        "Aceite que haverá dias melhores e piores - a chave é voltar ao caminho certo rapidamente após desvios.",
        "Uma noite de sono adequado reduz a fome e melhora suas escolhas alimentares no dia seguinte.",
        "Valorize cada passo da jornada - o processo de transformação é tão importante quanto o resultado final.",
    ],
];
