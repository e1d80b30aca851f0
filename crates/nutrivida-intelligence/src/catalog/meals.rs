// ABOUTME: Meal option tables for the six diet-plan slots and the plan tip sets
// ABOUTME: Index order is stable: selections already served point into these tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

/// Café da manhã
pub(super) const BREAKFAST: &[&[&str]] = &[
    &[
        "2 fatias de pão integral",
        "1 colher de sopa de pasta de amendoim",
        "1 maçã",
        "1 xícara de chá verde",
    ],
    &[
        "Omelete com 2 ovos, tomate e espinafre",
        "1 fatia de pão integral",
        "1 xícara de chá de hortelã",
    ],
    &[
        "Mingau de aveia (40g) com canela e banana",
        "1 colher de chá de mel",
        "1 xícara de leite desnatado",
    ],
    &[
        "Iogurte natural (200g) com granola sem açúcar (20g)",
        "1 punhado de frutas vermelhas",
        "1 xícara de chá de camomila",
    ],
    &[
        "Panquecas de banana (1 banana + 1 ovo + canela)",
        "1 colher de sopa de mel",
        "1 xícara de café com leite desnatado",
    ],
    &[
        "Tapioca média com queijo branco e orégano",
        "1 laranja",
        "1 xícara de chá verde",
    ],
    &[
        "Smoothie de banana, morango e leite de amêndoas",
        "1 torrada integral com abacate",
    ],
    &[
        "200g de cuscuz de milho",
        "1 ovo cozido",
        "1 maçã",
        "1 xícara de café preto",
    ],
    &[
        "2 fatias de pão integral com 2 colheres de requeijão light",
        "1 fatia de melão",
        "1 xícara de chá mate",
    ],
    &[
        "Vitamina de mamão com aveia (200ml)",
        "1 torrada integral com queijo branco",
    ],
];

/// Lanche da manhã
pub(super) const MORNING_SNACK: &[&[&str]] = &[
    &[
        "1 iogurte natural desnatado",
        "1 colher de sopa de granola sem açúcar",
        "5 unidades de castanha-do-pará",
    ],
    &[
        "1 maçã média",
        "12 amêndoas",
    ],
    &["1 banana com 1 colher de sopa de pasta de amendoim"],
    &[
        "1 pote pequeno de salada de frutas",
        "3 castanhas de caju",
    ],
    &[
        "1 pera média",
        "1 fatia de queijo branco",
    ],
    &["1 copo de suco verde (couve, limão, gengibre, maçã)"],
    &[
        "1 barra de cereal integral sem açúcar",
        "1 tangerina",
    ],
    &["1 fatia média de melão com 50g de presunto de peru"],
    &[
        "1 iogurte de kefir (200ml)",
        "2 colheres de aveia",
    ],
    &["1 xícara de morangos com 1 colher de iogurte natural"],
];

/// Almoço
pub(super) const LUNCH: &[&[&str]] = &[
    &[
        "120g de peito de frango grelhado",
        "2 colheres de sopa de arroz integral",
        "4 colheres de sopa de feijão",
        "Salada de folhas verdes à vontade",
        "1 colher de sobremesa de azeite",
    ],
    &[
        "120g de salmão assado",
        "1 batata doce média assada",
        "Legumes no vapor (brócolis, cenoura, abobrinha)",
        "1 colher de sopa de azeite",
    ],
    &[
        "120g de carne magra grelhada",
        "3 colheres de sopa de arroz integral",
        "2 colheres de sopa de lentilhas",
        "Salada de tomate, pepino e cebola roxa",
        "1 colher de chá de azeite",
    ],
    &[
        "2 ovos cozidos",
        "4 colheres de sopa de quinoa",
        "Mix de legumes salteados (abobrinha, berinjela, pimentão)",
        "1 colher de sopa de azeite",
    ],
    &[
        "120g de peixe branco assado",
        "Purê de abóbora (100g)",
        "Salada de folhas e tomate cereja",
        "1 colher de sobremesa de azeite",
    ],
    &[
        "120g de peito de peru grelhado",
        "4 colheres de sopa de arroz de couve-flor",
        "Salada de repolho e cenoura ralada",
        "1 colher de chá de azeite",
    ],
    &[
        "Omelete de legumes (2 ovos + abobrinha, tomate, cebola)",
        "2 colheres de sopa de arroz integral",
        "Salada verde com rúcula e agrião",
        "1 colher de azeite",
    ],
    &[
        "Escondidinho de batata doce com frango desfiado (150g)",
        "Salada de alface, tomate e pepino",
        "1 colher de chá de azeite",
    ],
    &[
        "100g de carne moída refogada com legumes",
        "3 colheres de sopa de macarrão integral",
        "Salada de agrião com tomate",
        "1 colher de chá de azeite",
    ],
    &[
        "Bowl de proteína (100g de frango + quinoa + brócolis + cenoura + tomate)",
        "1 colher de azeite",
    ],
];

/// Lanche da tarde
pub(super) const AFTERNOON_SNACK: &[&[&str]] = &[
    &[
        "1 banana média",
        "1 colher de sopa de aveia",
        "1 copo de água de coco",
    ],
    &[
        "1 fatia de pão integral com 1 fatia de queijo branco",
        "1 xícara de chá verde",
    ],
    &["1 maçã média com 1 colher de sopa de pasta de amendoim"],
    &[
        "1 pote pequeno de iogurte natural com canela",
        "5 nozes",
    ],
    &[
        "1 ovo cozido",
        "1 torrada integral",
        "1 xícara de chá de erva-cidreira",
    ],
    &["Shake proteico (200ml de leite desnatado + 1 scoop de proteína + 1 fruta)"],
    &[
        "1 barrinha caseira de aveia e banana",
        "1 xícara de chá de hortelã",
    ],
    &[
        "200ml de vitamina de abacate (sem açúcar)",
        "2 biscoitos integrais",
    ],
    &[
        "2 fatias de abacaxi",
        "1 fatia de queijo branco",
        "1 xícara de chá mate",
    ],
    &[
        "1 pera com 1 colher de canela",
        "5 amêndoas",
    ],
];

/// Jantar
pub(super) const DINNER: &[&[&str]] = &[
    &[
        "120g de peixe assado",
        "Legumes no vapor (brócolis, cenoura, abobrinha)",
        "1 batata doce pequena",
    ],
    &[
        "Sopa de legumes com peito de frango desfiado (300ml)",
        "1 fatia de pão integral",
    ],
    &[
        "Omelete de espinafre (2 ovos)",
        "Salada de folhas verdes",
        "1 colher de chá de azeite",
    ],
    &[
        "Salada de atum (100g) com folhas verdes, tomate e pepino",
        "1 colher de azeite",
        "1 fatia de pão integral",
    ],
    &[
        "100g de peito de frango grelhado",
        "Purê de couve-flor (100g)",
        "Salada de rúcula e tomate",
        "1 colher de chá de azeite",
    ],
    &[
        "100g de carne magra grelhada",
        "Abobrinha refogada",
        "Salada de alface e tomate",
        "1 colher de chá de azeite",
    ],
    &[
        "120g de peixe assado com ervas",
        "Mix de legumes assados (pimentão, cebola, tomate)",
        "1 colher de chá de azeite",
    ],
    &[
        "Wrap de alface com atum (100g), tomate e cebola",
        "1 colher de chá de azeite",
    ],
    &[
        "100g de tofu grelhado com legumes",
        "Salada de folhas verdes",
        "1 colher de chá de azeite",
    ],
    &[
        "2 ovos mexidos com espinafre e cogumelos",
        "Salada de tomate e pepino",
        "1 colher de chá de azeite",
    ],
];

/// Ceia
pub(super) const EVENING_SNACK: &[&[&str]] = &[
    &[
        "1 xícara de chá de camomila",
        "3 castanhas",
    ],
    &["1 copo pequeno de leite morno com canela"],
    &["1 iogurte natural (100g)"],
    &["Chá de erva-doce sem açúcar"],
    &["1 banana pequena"],
    &["1 maçã pequena fatiada com canela"],
    &["1 xícara de chá de melissa"],
    &["1/2 pera"],
    &["1 copo de leite vegetal sem açúcar"],
    &["1 iogurte kefir (100ml)"],
];

/// Dicas para manter o plano alimentar (three per set)
pub(super) const NUTRITION_TIPS: &[&[&str]] = &[
    &[
        "Prepare as refeições com antecedência para evitar escolhas impulsivas",
        "Beba pelo menos 2 litros de água por dia",
        "Evite alimentos processados e ultra-processados",
    ],
    &[
        "Mastigue bem os alimentos para melhorar a digestão",
        "Evite refrigerantes e sucos industrializados",
        "Prefira alimentos integrais aos refinados",
    ],
    &[
        "Respeite os horários das refeições",
        "Coma devagar, em ambiente tranquilo",
        "Inclua proteínas magras em todas as refeições",
    ],
    &[
        "Priorize métodos de cocção como cozimento, assado ou grelhado",
        "Tenha sempre vegetais e frutas disponíveis para lanches",
        "Utilize ervas e especiarias para dar sabor aos alimentos em vez de sal em excesso",
    ],
    &[
        "Leia os rótulos dos alimentos antes de comprar",
        "Reduza o consumo de açúcares adicionados",
        "Não pule refeições, especialmente o café da manhã",
    ],
];
